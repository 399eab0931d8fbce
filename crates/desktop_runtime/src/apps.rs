//! Application registry built from the externally supplied descriptor list.

use std::rc::Rc;

use crate::model::{Alignment, AppHandle, AppName, ApplicationDescriptor};

/// Enabled application descriptors in configuration order.
///
/// Disabled entries are dropped on construction and behave as if they were never configured.
/// Duplicate names are kept so each configured shortcut still renders, but they resolve to one
/// logical application: [`AppRegistry::find`] returns the first match.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppRegistry {
    apps: Vec<AppHandle>,
}

impl AppRegistry {
    pub fn from_descriptors(descriptors: impl IntoIterator<Item = ApplicationDescriptor>) -> Self {
        Self {
            apps: descriptors
                .into_iter()
                .filter(|descriptor| descriptor.enabled)
                .map(Rc::new)
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppHandle> {
        self.apps.iter()
    }

    pub fn find(&self, name: &AppName) -> Option<AppHandle> {
        self.apps.iter().find(|app| app.name == *name).cloned()
    }

    /// Desktop shortcuts for one column.
    pub fn shortcuts(&self, alignment: Alignment) -> Vec<AppHandle> {
        self.apps
            .iter()
            .filter(|app| app.alignment == alignment)
            .cloned()
            .collect()
    }

    /// Start menu entries (every enabled app, configuration order).
    pub fn menu_items(&self) -> Vec<AppHandle> {
        self.apps.clone()
    }

    pub fn autostart(&self) -> Vec<AppHandle> {
        self.apps
            .iter()
            .filter(|app| app.autostart)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn names(apps: &[AppHandle]) -> Vec<&str> {
        apps.iter().map(|app| app.name.as_str()).collect()
    }

    #[test]
    fn disabled_entries_are_absent() {
        let mut hidden = ApplicationDescriptor::new("Hidden");
        hidden.enabled = false;
        let registry = AppRegistry::from_descriptors(vec![
            ApplicationDescriptor::new("Notepad"),
            hidden,
        ]);

        assert_eq!(registry.len(), 1);
        assert!(registry.find(&AppName::new("Hidden")).is_none());
        assert_eq!(names(&registry.menu_items()), vec!["Notepad"]);
    }

    #[test]
    fn shortcuts_split_by_alignment_in_config_order() {
        let mut trash = ApplicationDescriptor::new("Recycle Bin");
        trash.alignment = Alignment::End;
        let registry = AppRegistry::from_descriptors(vec![
            ApplicationDescriptor::new("Notepad"),
            trash,
            ApplicationDescriptor::new("Paint"),
        ]);

        assert_eq!(
            names(&registry.shortcuts(Alignment::Start)),
            vec!["Notepad", "Paint"]
        );
        assert_eq!(
            names(&registry.shortcuts(Alignment::End)),
            vec!["Recycle Bin"]
        );
    }

    #[test]
    fn duplicate_names_resolve_to_first_descriptor() {
        let registry = AppRegistry::from_descriptors(vec![
            ApplicationDescriptor::new("Music").with_content("first"),
            ApplicationDescriptor::new("Music").with_content("second"),
        ]);

        assert_eq!(registry.len(), 2);
        let found = registry.find(&AppName::new("Music")).expect("music");
        assert_eq!(found.content.as_str(), "first");
    }

    #[test]
    fn autostart_lists_only_flagged_apps() {
        let mut welcome = ApplicationDescriptor::new("Welcome");
        welcome.autostart = true;
        let registry =
            AppRegistry::from_descriptors(vec![ApplicationDescriptor::new("Notepad"), welcome]);

        assert_eq!(names(&registry.autostart()), vec!["Welcome"]);
    }

    #[test]
    fn empty_registry_is_valid() {
        let registry = AppRegistry::from_descriptors(Vec::new());
        assert!(registry.is_empty());
        assert!(registry.autostart().is_empty());
        assert!(registry.shortcuts(Alignment::Start).is_empty());
    }
}
