//! Tree re-encoding stage
//!
//! Turns the rows of a tabular file into the catalog import document the
//! downstream platform ingests: a `catalog` root carrying the namespace and
//! catalog identity, a `products` collection, and one `product` element per
//! data row. The mapping from row fields to element content is positional
//! and follows the tabular field order contract.

use std::io::{Read, Write};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::debug;

use crate::domain::ids::CategoryId;
use crate::domain::{FeedmillError, Result, RECORD_FIELD_COUNT};

use super::tabular::TabularReader;

/// Namespace of the catalog import document
pub const CATALOG_XMLNS: &str = "http://www.demandware.com/xml/impex/catalog/2021-01-01";

/// Catalog the import document targets
pub const CATALOG_ID: &str = "storefront-catalog-m-en";

/// Re-encodes the remaining rows of `rows` as a catalog document into `sink`
///
/// The caller must already have consumed the header row; every row still in
/// the reader becomes one `product` element. Calling this with the header
/// unread would emit the header text as a bogus product.
///
/// Text content and attribute values are escaped on write, so field content
/// containing `<`, `&` or quotes round-trips through the document unchanged.
/// The sink is flushed before returning. Returns the number of `product`
/// elements written; a reader with no rows left yields a well-formed
/// document with an empty `products` collection and a count of zero.
pub fn encode_tree<R: Read, W: Write>(
    rows: &mut TabularReader<R>,
    category: &CategoryId,
    sink: W,
) -> Result<usize> {
    let mut writer = Writer::new_with_indent(sink, b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut catalog = BytesStart::new("catalog");
    catalog.push_attribute(("xmlns", CATALOG_XMLNS));
    catalog.push_attribute(("catalog-id", CATALOG_ID));
    catalog.push_attribute(("category-id", category.as_str()));
    writer.write_event(Event::Start(catalog))?;

    writer.write_event(Event::Start(BytesStart::new("products")))?;

    let mut products = 0usize;
    while let Some(row) = rows.read_row()? {
        if row.len() != RECORD_FIELD_COUNT {
            return Err(FeedmillError::Csv(format!(
                "Expected {} fields per row, got {}",
                RECORD_FIELD_COUNT,
                row.len()
            )));
        }

        let mut product = BytesStart::new("product");
        product.push_attribute(("id", &row[1]));
        writer.write_event(Event::Start(product))?;

        write_leaf(&mut writer, "name", &row[0])?;
        write_leaf(&mut writer, "description", &row[2])?;
        write_leaf(&mut writer, "price", &row[3])?;

        writer.write_event(Event::End(BytesEnd::new("product")))?;
        products += 1;
    }

    writer.write_event(Event::End(BytesEnd::new("products")))?;
    writer.write_event(Event::End(BytesEnd::new("catalog")))?;

    let mut sink = writer.into_inner();
    sink.flush()?;

    debug!(products, category = %category, "Tree re-encoding completed");
    Ok(products)
}

fn write_leaf<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
