use tabled::Table;

use crate::{
    cli::auth,
    error,
    fields::{self, Field},
    spotify::entities::EntityFetcher,
    types::{EntityKind, FieldTableRow},
};

/// Prints fields of a single track or artist.
///
/// With `field` set only that value is printed, otherwise a table with the
/// default fields of the entity kind.
///
/// # Example Usage
///
/// ```bash
/// spotcollect track 3bGfuGWywg85koHG8nturm
/// spotcollect track 3bGfuGWywg85koHG8nturm --field available_markets_count
/// spotcollect artist 4NHQUGzhtTLFvgF5SZesLK --field genres
/// ```
pub async fn lookup(kind: EntityKind, id: &str, field: Option<Field>) {
    let transport = auth::transport().await;
    let mut fetcher = EntityFetcher::new(&transport);

    let pb = auth::spinner(&format!("Fetching {} {}...", kind, id));
    let record = fetcher.fetch(kind, id).await;
    pb.finish_and_clear();

    let record = match record {
        Ok(record) => record,
        Err(e) => {
            error!("Failed to fetch {} {}. Err: {}", kind, id, e);
        }
    };

    if let Some(field) = field {
        match fields::project(record, field) {
            Ok(value) => println!("{}", value),
            Err(e) => error!("{}", e),
        }
        return;
    }

    let rows: Vec<FieldTableRow> = Field::for_kind(kind)
        .iter()
        .map(|field| FieldTableRow {
            field: field.to_string(),
            value: match fields::project(record, *field) {
                Ok(value) => value.to_string(),
                Err(_) => "-".to_string(),
            },
        })
        .collect();

    println!("{}", Table::new(rows));
}
