use std::io::Write;

use serde_json::json;
use stockroom_catalog::{is_integer, Inventory};

use crate::app_config::Config;

/// Walk through the catalog: direct construction, renaming, discounts,
/// integer checks and the optional CSV load. Output goes to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<Inventory> {
    let mut inventory = Inventory::with_discount(config.catalog.discount);

    let item = inventory.create_item("myItem", 750.0, 0.0)?;
    item.name = "newItemName".to_string();
    writeln!(out, "{}", item.name)?;

    inventory.create_item("Laptop", 1000.0, 2.0)?;
    let phone = inventory.create_phone("iPhone10", 500.0, 5.0, 1)?.clone();
    writeln!(out, "{}", inventory.apply_discount(&phone))?;
    inventory.create_phone("iPhone13", 700.0, 5.0, 1)?;

    for value in [json!("fart"), json!(1.0), json!(15.0), json!(15.7)] {
        writeln!(out, "{}", is_integer(&value))?;
    }

    if let Some(path) = &config.catalog.items_csv {
        let loaded = inventory.load_items_from_path(path)?;
        tracing::info!("Loaded {} items from {}", loaded, path.display());
    }

    writeln!(out, "{}", inventory.items_listing())?;
    writeln!(out, "{}", inventory.phones_listing())?;

    Ok(inventory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        let inventory = run(&Config::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "newItemName");
        assert_eq!(lines[1], "2000");
        assert_eq!(&lines[2..6], ["false", "true", "true", "false"]);
        assert_eq!(
            lines[6],
            "[Item('newItemName', '750', '0'), Item('Laptop', '1000', '2')]"
        );
        assert_eq!(
            lines[7],
            "[Phone('iPhone10', '500', '5'), Phone('iPhone13', '700', '5')]"
        );

        assert_eq!(inventory.items().len(), 2);
        assert_eq!(inventory.phones().len(), 2);
    }

    #[test]
    fn test_demo_fails_on_missing_csv() {
        let mut config = Config::default();
        config.catalog.items_csv = Some("/nonexistent/stockroom/items.csv".into());

        let mut out = Vec::new();
        assert!(run(&config, &mut out).is_err());
    }
}
