// Fixed registries shared by the dialect extractors
//
// Output compatibility depends on these lists staying exactly as they are:
// membership decides classification, and list order decides "first match wins".

use super::types::PlatformComponent;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Standard host-markup element names, matched case-insensitively
pub const KNOWN_HTML_TAGS: &[&str] = &[
    // Document structure
    "html", "head", "body", "title", "meta", "link", "script", "style", "noscript",
    // Sectioning
    "header", "footer", "main", "nav", "section", "article", "aside", "address",
    "h1", "h2", "h3", "h4", "h5", "h6",
    // Grouping
    "div", "p", "hr", "pre", "blockquote", "ol", "ul", "li", "dl", "dt", "dd",
    "figure", "figcaption",
    // Text-level
    "a", "em", "strong", "small", "code", "sup", "i", "b", "u",
    "mark", "span", "br", "time",
    // Media and embedded
    "img", "iframe", "embed", "object", "video", "audio", "source", "canvas",
    "svg", "picture",
    // Tables
    "table", "caption", "thead", "tbody", "tfoot", "tr", "th", "td",
    // Forms
    "form", "label", "input", "button", "select", "option",
    "textarea", "progress", "fieldset", "legend",
    // Interactive
    "details", "summary", "dialog", "template", "slot",
];

static KNOWN_HTML_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| KNOWN_HTML_TAGS.iter().copied().collect());

/// Whether `tag` is a standard host-markup element (case-insensitive)
pub fn is_known_html_tag(tag: &str) -> bool {
    KNOWN_HTML_TAG_SET.contains(tag.to_ascii_lowercase().as_str())
}

/// Superclass names that make a widget-language class a widget
pub const WIDGET_BASE_CLASSES: &[&str] = &[
    "StatelessWidget",
    "StatefulWidget",
    "Widget",
    "PreferredSizeWidget",
    "RenderObjectWidget",
    "SingleChildRenderObjectWidget",
    "MultiChildRenderObjectWidget",
    "LeafRenderObjectWidget",
    "InheritedWidget",
    "InheritedModel",
    "InheritedNotifier",
    "InheritedTheme",
    "ProxyWidget",
    "ParentDataWidget",
    "ImplicitlyAnimatedWidget",
    "AnimatedWidget",
    "StatusTransitionWidget",
    "ConsumerWidget",
    "ConsumerStatefulWidget",
    "HookWidget",
    "StatefulHookWidget",
    "HookConsumerWidget",
    "StatefulHookConsumerWidget",
    "GetView",
    "GetWidget",
    "GetResponsiveView",
    "GetResponsiveWidget",
    "BlocBuilder",
    "BlocListener",
    "BlocConsumer",
    "BlocProvider",
    "BlocSelector",
    "Observer",
    "ScrollView",
    "BoxScrollView",
    "CustomScrollView",
    "FormField",
    "ButtonStyleButton",
    "MaterialButton",
    "SingleChildStatelessWidget",
    "SingleChildStatefulWidget",
    "ValueListenableBuilder",
    "AnimatedBuilder",
    "StreamBuilderBase",
    "ConstrainedLayoutBuilder",
];

pub fn is_widget_base_class(name: &str) -> bool {
    WIDGET_BASE_CLASSES.contains(&name)
}

/// State-management idiom names, in priority order
pub const STATE_MANAGEMENT_PATTERNS: &[&str] = &[
    "Provider",
    "Riverpod",
    "Bloc",
    "Cubit",
    "GetX",
    "MobX",
    "Redux",
    "ChangeNotifier",
    "StateNotifier",
    "ValueNotifier",
    "InheritedWidget",
    "StreamController",
    "setState",
];

/// Import-path fragments that reveal a state-management package, with the idiom each implies
pub const STATE_PACKAGE_FRAGMENTS: &[(&str, &str)] = &[
    ("provider", "Provider"),
    ("riverpod", "Riverpod"),
    ("bloc", "Bloc"),
    ("package:get/", "GetX"),
    ("mobx", "MobX"),
];

/// Marker tokens recognised anywhere in widget-language source
pub const KNOWN_ANNOTATIONS: &[&str] = &[
    "@override",
    "@immutable",
    "@required",
    "@protected",
    "@visibleForTesting",
    "@mustCallSuper",
    "@deprecated",
    "@JsonSerializable",
    "@freezed",
];

/// Platform base classes and the component kind each one declares
pub const PLATFORM_COMPONENT_BASES: &[(&str, PlatformComponent)] = &[
    ("Activity", PlatformComponent::Activity),
    ("AppCompatActivity", PlatformComponent::Activity),
    ("ComponentActivity", PlatformComponent::Activity),
    ("FragmentActivity", PlatformComponent::Activity),
    ("Fragment", PlatformComponent::Fragment),
    ("DialogFragment", PlatformComponent::Fragment),
    ("Service", PlatformComponent::Service),
    ("IntentService", PlatformComponent::Service),
    ("LifecycleService", PlatformComponent::Service),
    ("BroadcastReceiver", PlatformComponent::BroadcastReceiver),
    ("ContentProvider", PlatformComponent::ContentProvider),
    ("Application", PlatformComponent::Application),
    ("MultiDexApplication", PlatformComponent::Application),
];

pub fn platform_component_for(superclass: &str) -> Option<PlatformComponent> {
    PLATFORM_COMPONENT_BASES
        .iter()
        .find(|(base, _)| *base == superclass)
        .map(|(_, kind)| *kind)
}

/// Import-source substrings that identify an embedded-markup UI framework
pub const MARKUP_FRAMEWORK_PACKAGES: &[&str] = &["react", "preact", "solid-js", "inferno"];

pub fn is_markup_framework_source(source: &str) -> bool {
    MARKUP_FRAMEWORK_PACKAGES
        .iter()
        .any(|fragment| source.contains(fragment))
}
