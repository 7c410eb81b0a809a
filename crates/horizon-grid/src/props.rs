//! Grid configuration.
//!
//! [`GridProps`] is the complete configuration record held by a grid's store.
//! [`GridPropsPatch`] is its partial form: every field is optional and an
//! absent field leaves the current value alone.
//!
//! Updates are merged with the shallow rule from
//! [`horizon_grid_core::merge`]: object-valued fields (`grid_options`,
//! `form_options`, `grid_events`, map-style class sets, separator options)
//! are unioned one level deep, and everything below that level, including
//! arrays such as column lists, is replaced wholesale.
//!
//! # Loading from configuration text
//!
//! Both types deserialize with the camelCase keys the grid widget uses:
//!
//! ```
//! use horizon_grid::GridPropsPatch;
//!
//! let patch = GridPropsPatch::from_json_str(r#"{
//!     "tableTitle": "Users",
//!     "showSearchForm": false,
//!     "gridOptions": { "border": true, "columns": [{ "field": "name" }] }
//! }"#).unwrap();
//!
//! assert_eq!(patch.show_search_form, Some(false));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use horizon_grid_core::merge::union_maps;
use horizon_grid_core::{ShallowMerge, StateUpdate};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// A styling class token set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassValue {
    /// A space-separated class string.
    Name(String),
    /// A list of class names.
    List(Vec<String>),
    /// Class names mapped to whether they apply.
    Map(BTreeMap<String, bool>),
}

impl ClassValue {
    /// Merge `incoming` onto this class set.
    ///
    /// Two map-style sets are unioned; anything else is replaced.
    pub fn merged(&self, incoming: ClassValue) -> ClassValue {
        match (self, incoming) {
            (ClassValue::Map(existing), ClassValue::Map(incoming)) => {
                let mut merged = existing.clone();
                merged.extend(incoming);
                ClassValue::Map(merged)
            }
            (_, incoming) => incoming,
        }
    }

    /// Whether the set holds no classes.
    pub fn is_empty(&self) -> bool {
        match self {
            ClassValue::Name(name) => name.trim().is_empty(),
            ClassValue::List(list) => list.is_empty(),
            ClassValue::Map(map) => !map.values().any(|enabled| *enabled),
        }
    }
}

impl Default for ClassValue {
    fn default() -> Self {
        ClassValue::Name(String::new())
    }
}

impl From<&str> for ClassValue {
    fn from(name: &str) -> Self {
        ClassValue::Name(name.to_string())
    }
}

/// Options for the separator between the search form and the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeparatorOptions {
    /// Whether the separator is shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    /// Background color of the separator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

/// Separator configuration: a plain toggle or detailed options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Separator {
    /// Show or hide with default styling.
    Flag(bool),
    /// Detailed options.
    Options(SeparatorOptions),
}

impl Separator {
    /// Merge `incoming` onto this separator.
    ///
    /// Two option sets are unioned field by field; anything else is replaced.
    pub fn merged(&self, incoming: Separator) -> Separator {
        match (self, incoming) {
            (Separator::Options(existing), Separator::Options(incoming)) => {
                Separator::Options(SeparatorOptions {
                    show: incoming.show.or(existing.show),
                    background_color: incoming
                        .background_color
                        .or_else(|| existing.background_color.clone()),
                })
            }
            (_, incoming) => incoming,
        }
    }
}

/// A grid event handler. Receives the event payload.
pub type EventHandler = Arc<dyn Fn(&Value) + Send + Sync>;

/// Grid event handlers keyed by event name.
///
/// Handlers are forwarded to the widget untouched. Two handler sets compare
/// equal when they hold the same names bound to the same handler instances.
#[derive(Clone, Default)]
pub struct GridEvents {
    handlers: BTreeMap<String, EventHandler>,
}

impl GridEvents {
    /// An empty handler set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn on<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        self.insert(name, handler);
        self
    }

    /// Bind `handler` to `name`, returning the handler it replaced.
    pub fn insert<F>(&mut self, name: impl Into<String>, handler: F) -> Option<EventHandler>
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        self.handlers.insert(name.into(), Arc::new(handler))
    }

    /// The handler bound to `name`.
    pub fn get(&self, name: &str) -> Option<&EventHandler> {
        self.handlers.get(name)
    }

    /// Whether a handler is bound to `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Invoke the handler bound to `name`, if any.
    ///
    /// Returns `true` if a handler ran.
    pub fn emit(&self, name: &str, payload: &Value) -> bool {
        match self.handlers.get(name) {
            Some(handler) => {
                handler(payload);
                true
            }
            None => false,
        }
    }

    /// Bound event names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Number of bound events.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no events are bound.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Union with `incoming`, whose bindings win.
    pub fn merged(&self, incoming: GridEvents) -> GridEvents {
        let mut handlers = self.handlers.clone();
        handlers.extend(incoming.handlers);
        GridEvents { handlers }
    }
}

impl PartialEq for GridEvents {
    fn eq(&self, other: &Self) -> bool {
        self.handlers.len() == other.handlers.len()
            && self
                .handlers
                .iter()
                .zip(other.handlers.iter())
                .all(|((a_name, a), (b_name, b))| a_name == b_name && Arc::ptr_eq(a, b))
    }
}

impl fmt::Debug for GridEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// The complete grid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridProps {
    /// Title shown above the grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_title: Option<String>,
    /// Help text shown next to the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_title_help: Option<String>,
    /// Class set applied to the root element.
    pub class: ClassValue,
    /// Class set applied to the grid element.
    pub grid_class: ClassValue,
    /// Options forwarded verbatim to the grid widget.
    pub grid_options: Map<String, Value>,
    /// Event handlers forwarded verbatim to the grid widget.
    #[serde(skip)]
    pub grid_events: GridEvents,
    /// Configuration of the companion search form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_options: Option<Map<String, Value>>,
    /// Whether the search form is visible.
    pub show_search_form: bool,
    /// Separator between the search form and the grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<Separator>,
}

impl Default for GridProps {
    fn default() -> Self {
        Self {
            table_title: None,
            table_title_help: None,
            class: ClassValue::default(),
            grid_class: ClassValue::default(),
            grid_options: Map::new(),
            grid_events: GridEvents::new(),
            form_options: None,
            show_search_form: true,
            separator: None,
        }
    }
}

impl GridProps {
    /// Defaults with `patch` merged on top.
    pub fn from_patch(patch: GridPropsPatch) -> Self {
        Self::default().merge(patch)
    }

    /// The widget's `loading` option, `false` when unset.
    pub fn is_loading(&self) -> bool {
        self.grid_options
            .get("loading")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// The widget's `toolbarConfig` option, if it is an object.
    pub fn toolbar_config(&self) -> Option<&Map<String, Value>> {
        self.grid_options.get("toolbarConfig").and_then(Value::as_object)
    }

    /// Whether the toolbar asks for a search-form toggle button.
    pub fn shows_search_toggle(&self) -> bool {
        self.toolbar_config()
            .and_then(|toolbar| toolbar.get("search"))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

impl ShallowMerge for GridProps {
    type Patch = GridPropsPatch;

    fn merge(&self, patch: GridPropsPatch) -> Self {
        let mut next = self.clone();

        if let Some(title) = patch.table_title {
            next.table_title = title;
        }
        if let Some(help) = patch.table_title_help {
            next.table_title_help = help;
        }
        if let Some(class) = patch.class {
            next.class = self.class.merged(class);
        }
        if let Some(grid_class) = patch.grid_class {
            next.grid_class = self.grid_class.merged(grid_class);
        }
        if let Some(options) = patch.grid_options {
            next.grid_options = union_maps(&self.grid_options, options);
        }
        if let Some(events) = patch.grid_events {
            next.grid_events = self.grid_events.merged(events);
        }
        if let Some(form_options) = patch.form_options {
            next.form_options = match (&self.form_options, form_options) {
                (Some(existing), Some(incoming)) => Some(union_maps(existing, incoming)),
                (_, incoming) => incoming,
            };
        }
        if let Some(show) = patch.show_search_form {
            next.show_search_form = show;
        }
        if let Some(separator) = patch.separator {
            next.separator = match (&self.separator, separator) {
                (Some(existing), Some(incoming)) => Some(existing.merged(incoming)),
                (_, incoming) => incoming,
            };
        }

        next
    }
}

/// A partial [`GridProps`]. `None` fields are left untouched by a merge.
///
/// Fields that are optional in [`GridProps`] take a second `Option`:
/// `Some(None)` (a `null` in configuration text) clears the value.
/// A `null` for any other field counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridPropsPatch {
    #[serde(deserialize_with = "nullable")]
    pub table_title: Option<Option<String>>,
    #[serde(deserialize_with = "nullable")]
    pub table_title_help: Option<Option<String>>,
    pub class: Option<ClassValue>,
    pub grid_class: Option<ClassValue>,
    pub grid_options: Option<Map<String, Value>>,
    #[serde(skip)]
    pub grid_events: Option<GridEvents>,
    #[serde(deserialize_with = "nullable")]
    pub form_options: Option<Option<Map<String, Value>>>,
    pub show_search_form: Option<bool>,
    #[serde(deserialize_with = "nullable")]
    pub separator: Option<Option<Separator>>,
}

/// Present-but-null becomes `Some(None)`; a missing key stays `None` through
/// `#[serde(default)]`.
fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl GridPropsPatch {
    /// An empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a patch from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse a patch from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Build a patch from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn table_title(mut self, title: impl Into<String>) -> Self {
        self.table_title = Some(Some(title.into()));
        self
    }

    pub fn clear_table_title(mut self) -> Self {
        self.table_title = Some(None);
        self
    }

    pub fn table_title_help(mut self, help: impl Into<String>) -> Self {
        self.table_title_help = Some(Some(help.into()));
        self
    }

    pub fn clear_table_title_help(mut self) -> Self {
        self.table_title_help = Some(None);
        self
    }

    pub fn class(mut self, class: impl Into<ClassValue>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn grid_class(mut self, class: impl Into<ClassValue>) -> Self {
        self.grid_class = Some(class.into());
        self
    }

    pub fn grid_options(mut self, options: Map<String, Value>) -> Self {
        self.grid_options = Some(options);
        self
    }

    pub fn grid_events(mut self, events: GridEvents) -> Self {
        self.grid_events = Some(events);
        self
    }

    pub fn form_options(mut self, options: Map<String, Value>) -> Self {
        self.form_options = Some(Some(options));
        self
    }

    /// Remove the search form configuration.
    pub fn clear_form_options(mut self) -> Self {
        self.form_options = Some(None);
        self
    }

    pub fn show_search_form(mut self, show: bool) -> Self {
        self.show_search_form = Some(show);
        self
    }

    pub fn separator(mut self, separator: Separator) -> Self {
        self.separator = Some(Some(separator));
        self
    }

    pub fn clear_separator(mut self) -> Self {
        self.separator = Some(None);
        self
    }

    /// Overlay `other` on this patch field by field, `other` winning.
    ///
    /// This is a top-level override, not a merge: a `grid_options` present in
    /// `other` replaces this patch's `grid_options` entirely.
    pub fn overlay(self, other: GridPropsPatch) -> GridPropsPatch {
        GridPropsPatch {
            table_title: other.table_title.or(self.table_title),
            table_title_help: other.table_title_help.or(self.table_title_help),
            class: other.class.or(self.class),
            grid_class: other.grid_class.or(self.grid_class),
            grid_options: other.grid_options.or(self.grid_options),
            grid_events: other.grid_events.or(self.grid_events),
            form_options: other.form_options.or(self.form_options),
            show_search_form: other.show_search_form.or(self.show_search_form),
            separator: other.separator.or(self.separator),
        }
    }

    /// Whether the patch carries no fields.
    pub fn is_empty(&self) -> bool {
        *self == GridPropsPatch::default()
    }
}

impl From<GridPropsPatch> for StateUpdate<GridProps> {
    fn from(patch: GridPropsPatch) -> Self {
        StateUpdate::Patch(patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("object literal")
    }

    #[test]
    fn test_defaults() {
        let props = GridProps::default();
        assert_eq!(props.class, ClassValue::Name(String::new()));
        assert_eq!(props.grid_class, ClassValue::Name(String::new()));
        assert!(props.grid_options.is_empty());
        assert!(props.grid_events.is_empty());
        assert_eq!(props.form_options, None);
        assert!(props.show_search_form);
        assert!(!props.is_loading());
    }

    #[test]
    fn test_from_patch_keeps_unset_defaults() {
        let props = GridProps::from_patch(GridPropsPatch::new().show_search_form(false));
        assert!(!props.show_search_form);
        assert!(props.grid_options.is_empty());
        assert_eq!(props.class, ClassValue::default());
    }

    #[test]
    fn test_grid_options_depth_one() {
        let props = GridProps::from_patch(
            GridPropsPatch::new().grid_options(obj(json!({ "a": 1, "b": 2 }))),
        );
        let next = props.merge(GridPropsPatch::new().grid_options(obj(json!({ "a": 9 }))));
        assert_eq!(Value::Object(next.grid_options), json!({ "a": 9, "b": 2 }));
    }

    #[test]
    fn test_toolbar_replaced_wholesale() {
        let props = GridProps::from_patch(
            GridPropsPatch::new().grid_options(obj(json!({ "toolbar": { "a": 1, "b": 2 } }))),
        );
        let next = props.merge(
            GridPropsPatch::new().grid_options(obj(json!({ "toolbar": { "a": 9 } }))),
        );
        assert_eq!(next.grid_options["toolbar"], json!({ "a": 9 }));
    }

    #[test]
    fn test_columns_replaced() {
        let props = GridProps::from_patch(
            GridPropsPatch::new().grid_options(obj(json!({ "columns": [1, 2, 3] }))),
        );
        let next = props.merge(GridPropsPatch::new().grid_options(obj(json!({ "columns": [9] }))));
        assert_eq!(next.grid_options["columns"], json!([9]));
    }

    #[test]
    fn test_form_options_merge_and_initialize() {
        let props = GridProps::default();
        let next = props.merge(GridPropsPatch::new().form_options(obj(json!({ "collapsed": true }))));
        assert_eq!(next.form_options, Some(obj(json!({ "collapsed": true }))));

        let next = next.merge(
            GridPropsPatch::new().form_options(obj(json!({ "schema": [{ "field": "name" }] }))),
        );
        assert_eq!(
            next.form_options,
            Some(obj(json!({ "collapsed": true, "schema": [{ "field": "name" }] })))
        );
    }

    #[test]
    fn test_class_merge() {
        let props = GridProps::from_patch(GridPropsPatch::new().class("p-2"));
        let next = props.merge(GridPropsPatch::new().class(ClassValue::List(vec!["a".into()])));
        assert_eq!(next.class, ClassValue::List(vec!["a".into()]));

        let with_map = next.merge(GridPropsPatch::new().class(ClassValue::Map(BTreeMap::from([
            ("dense".to_string(), true),
            ("striped".to_string(), false),
        ]))));
        let merged = with_map.merge(GridPropsPatch::new().class(ClassValue::Map(BTreeMap::from([
            ("striped".to_string(), true),
        ]))));
        assert_eq!(
            merged.class,
            ClassValue::Map(BTreeMap::from([
                ("dense".to_string(), true),
                ("striped".to_string(), true),
            ]))
        );
    }

    #[test]
    fn test_separator_merge() {
        let props = GridProps::from_patch(GridPropsPatch::new().separator(Separator::Options(
            SeparatorOptions {
                show: Some(true),
                background_color: Some("#fff".into()),
            },
        )));
        let next = props.merge(GridPropsPatch::new().separator(Separator::Options(
            SeparatorOptions {
                show: Some(false),
                background_color: None,
            },
        )));
        assert_eq!(
            next.separator,
            Some(Separator::Options(SeparatorOptions {
                show: Some(false),
                background_color: Some("#fff".into()),
            }))
        );

        let flag = next.merge(GridPropsPatch::new().separator(Separator::Flag(false)));
        assert_eq!(flag.separator, Some(Separator::Flag(false)));
    }

    #[test]
    fn test_events_merge_and_emit() {
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_clone = hits.clone();

        let props = GridProps::from_patch(GridPropsPatch::new().grid_events(
            GridEvents::new()
                .on("cell-click", move |_| {
                    hits_clone.fetch_add(1, Ordering::SeqCst);
                })
                .on("sort-change", |_| {}),
        ));
        let next = props.merge(
            GridPropsPatch::new().grid_events(GridEvents::new().on("page-change", |_| {})),
        );

        assert_eq!(
            next.grid_events.names().collect::<Vec<_>>(),
            vec!["cell-click", "page-change", "sort-change"]
        );
        assert!(next.grid_events.emit("cell-click", &json!({ "row": 1 })));
        assert!(!next.grid_events.emit("unbound", &Value::Null));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_events_equality_is_identity() {
        let events = GridEvents::new().on("cell-click", |_| {});
        assert_eq!(events, events.clone());
        assert_ne!(events, GridEvents::new().on("cell-click", |_| {}));
    }

    #[test]
    fn test_merge_idempotent() {
        let props = GridProps::default();
        let patch = GridPropsPatch::new()
            .table_title("Users")
            .show_search_form(false)
            .grid_options(obj(json!({ "loading": true, "border": "full" })));

        let once = props.merge(patch.clone());
        let twice = once.merge(patch);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_toolbar_search_flag() {
        let props = GridProps::from_patch(GridPropsPatch::new().grid_options(obj(json!({
            "toolbarConfig": { "search": true, "refresh": true }
        }))));
        assert!(props.shows_search_toggle());
        assert!(!GridProps::default().shows_search_toggle());
    }

    #[test]
    fn test_patch_from_json() {
        let patch = GridPropsPatch::from_json_str(
            r#"{
                "tableTitle": "Orders",
                "class": ["w-full"],
                "separator": { "show": false },
                "formOptions": { "collapsed": true }
            }"#,
        )
        .unwrap();

        assert_eq!(patch.table_title, Some(Some("Orders".to_string())));
        assert_eq!(patch.class, Some(ClassValue::List(vec!["w-full".into()])));
        assert_eq!(
            patch.separator,
            Some(Some(Separator::Options(SeparatorOptions {
                show: Some(false),
                background_color: None,
            })))
        );
        assert_eq!(patch.table_title_help, None);
        assert_eq!(patch.show_search_form, None);
        assert!(patch.grid_events.is_none());
    }

    #[test]
    fn test_patch_from_toml() {
        let patch = GridPropsPatch::from_toml_str(
            r#"
                tableTitle = "Users"
                showSearchForm = false
                separator = true

                [gridOptions]
                border = true
                columns = [{ field = "name" }, { field = "age" }]

                [gridOptions.toolbarConfig]
                search = true
            "#,
        )
        .unwrap();

        let props = GridProps::from_patch(patch);
        assert_eq!(props.table_title.as_deref(), Some("Users"));
        assert!(!props.show_search_form);
        assert_eq!(props.separator, Some(Separator::Flag(true)));
        assert_eq!(props.grid_options["columns"][1]["field"], json!("age"));
        assert!(props.shows_search_toggle());
    }

    #[test]
    fn test_null_clears_optional_fields() {
        let props = GridProps::from_patch(
            GridPropsPatch::from_json_str(
                r#"{
                    "formOptions": { "collapsed": true },
                    "tableTitle": "T",
                    "tableTitleHelp": "help",
                    "separator": true,
                    "showSearchForm": false
                }"#,
            )
            .unwrap(),
        );

        let patch = GridPropsPatch::from_json_str(
            r#"{ "formOptions": null, "tableTitle": null, "separator": null, "showSearchForm": null }"#,
        )
        .unwrap();
        assert_eq!(patch.form_options, Some(None));
        assert_eq!(patch.table_title, Some(None));
        assert_eq!(patch.table_title_help, None);

        let next = props.merge(patch);
        assert_eq!(next.form_options, None);
        assert_eq!(next.table_title, None);
        assert_eq!(next.separator, None);
        assert_eq!(next.table_title_help.as_deref(), Some("help"));
        // Non-optional fields have no null; it leaves them alone.
        assert!(!next.show_search_form);
    }

    #[test]
    fn test_clear_builders() {
        let props = GridProps::from_patch(
            GridPropsPatch::new()
                .table_title("Users")
                .table_title_help("All users")
                .form_options(obj(json!({ "collapsed": true })))
                .separator(Separator::Flag(true)),
        );
        let next = props.merge(
            GridPropsPatch::new()
                .clear_table_title()
                .clear_table_title_help()
                .clear_form_options()
                .clear_separator(),
        );
        assert_eq!(next, GridProps::default());

        // Setting after clearing starts from scratch.
        let again = next.merge(GridPropsPatch::new().form_options(obj(json!({ "schema": [] }))));
        assert_eq!(again.form_options, Some(obj(json!({ "schema": [] }))));
    }

    #[test]
    fn test_invalid_config_text() {
        assert!(GridPropsPatch::from_json_str("{ not json").is_err());
        assert!(GridPropsPatch::from_toml_str("showSearchForm = ").is_err());
    }

    #[test]
    fn test_overlay_is_top_level() {
        let props = GridPropsPatch::new()
            .table_title("from props")
            .grid_options(obj(json!({ "a": 1 })));
        let attrs = GridPropsPatch::new().grid_options(obj(json!({ "b": 2 })));

        let merged = props.overlay(attrs);
        assert_eq!(merged.table_title, Some(Some("from props".to_string())));
        assert_eq!(merged.grid_options, Some(obj(json!({ "b": 2 }))));
    }

    #[test]
    fn test_props_round_trip_through_serde() {
        let props = GridProps::from_patch(GridPropsPatch::new().table_title("Users"));
        let value = serde_json::to_value(&props).unwrap();
        assert_eq!(value["showSearchForm"], json!(true));
        assert!(value.get("gridEvents").is_none());

        let back: GridProps = serde_json::from_value(value).unwrap();
        assert_eq!(back, props);
    }
}
