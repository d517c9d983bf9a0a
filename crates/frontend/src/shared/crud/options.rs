use contracts::domain::common::Resource;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::use_config;
use crate::shared::api::browser_client;

/// `(id, name)` pairs of another collection, for reference selects
/// (a product's category, an admin's role). Empty until loaded.
pub fn use_options<R: Resource>() -> Signal<Vec<(String, String)>> {
    let options = RwSignal::new(Vec::new());
    let client = browser_client(&use_config());
    spawn_local(async move {
        match client.list::<R>("").await {
            Ok(records) => {
                let pairs = records
                    .iter()
                    .map(|r| (r.id().to_string(), r.display_name().to_string()))
                    .collect();
                options.try_set(pairs);
            }
            Err(e) => log::error!("{} options: {e}", R::resource_index()),
        }
    });
    options.into()
}

/// Label of `value` among `(value, label)` options; the raw value when it
/// is not (yet) among them.
pub fn option_label(options: &[(String, String)], value: &str) -> String {
    options
        .iter()
        .find(|(v, _)| v == value)
        .map(|(_, label)| label.clone())
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_fall_back_to_the_value() {
        let options = vec![("c1".to_string(), "Fruits".to_string())];
        assert_eq!(option_label(&options, "c1"), "Fruits");
        assert_eq!(option_label(&options, "c9"), "c9");
        assert_eq!(option_label(&[], ""), "");
    }
}
