// Codemap's Utilities Module
//
// Filesystem helpers used by the scan driver.

/// Path conversion utilities (absolute -> relative forward-slash)
pub mod paths;

/// File ignore pattern utilities (.codemapignore support)
pub mod ignore;
