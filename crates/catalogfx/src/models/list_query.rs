use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use catalogfx_core::catalog::ItemFilter;

/// Query string of the listing endpoint.
///
/// List-valued parameters are comma-separated: `?ids=a,b&target_currencies=USD,BRL`.
#[derive(Debug, Default, Deserialize)]
pub struct ListItemsQuery {
    pub ids: Option<String>,
    pub name: Option<String>,
    pub price: Option<String>,
    pub origin_currency: Option<String>,
    pub target_currencies: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

fn split_list(value: Option<&str>) -> impl Iterator<Item = &str> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
}

impl ListItemsQuery {
    /// Parses the raw parameters into a filter.
    ///
    /// Returns a message naming the offending parameter if an id or the
    /// price does not parse.
    pub fn into_filter(self) -> Result<ItemFilter, String> {
        let ids = split_list(self.ids.as_deref())
            .map(|raw| Uuid::parse_str(raw).map_err(|_| format!("Invalid item id: {raw}")))
            .collect::<Result<Vec<_>, _>>()?;

        let price = match self.price.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => {
                Some(Decimal::from_str(raw).map_err(|_| format!("Invalid price: {raw}"))?)
            }
        };

        let defaults = ItemFilter::default();

        Ok(ItemFilter {
            ids,
            name: self.name,
            price,
            origin_currency: self.origin_currency,
            target_currencies: split_list(self.target_currencies.as_deref())
                .map(str::to_string)
                .collect(),
            page: self.page.unwrap_or(defaults.page),
            page_size: self.page_size.unwrap_or(defaults.page_size),
        })
    }
}
