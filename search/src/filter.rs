//! The filter pipeline: query filter, scope restriction, sort.

use crate::matcher::{NormalizedQuery, value_contains};
use sift_core::error::{Result, SchemaError};
use sift_core::types::{Record, Schema, Scope};

/// Tests one record against a query.
///
/// The record's discriminant must name a schema entry: an unknown type is
/// [`SchemaError::UnknownType`] and an absent discriminant field is
/// [`SchemaError::MissingDiscriminant`]. The collection-level
/// [`filter_by_query`] excludes such records instead of erroring.
pub fn record_matches(
    record: &Record,
    query: &str,
    schema: &Schema,
    discriminant_field: &str,
) -> Result<bool> {
    let query = NormalizedQuery::new(query);

    let tag = record
        .discriminant(discriminant_field)
        .ok_or_else(|| SchemaError::MissingDiscriminant(discriminant_field.to_string()))?;
    let fields = schema
        .fields_for(tag)
        .ok_or_else(|| SchemaError::UnknownType(tag.to_string()))?;

    matches_declared_fields(record, fields, &query)
}

/// OR across the declared fields. Every field is evaluated: one absent on
/// the record is reported even when an earlier field already matched.
fn matches_declared_fields(
    record: &Record,
    fields: &[String],
    query: &NormalizedQuery,
) -> Result<bool> {
    let mut matched = false;
    for field in fields {
        let value = record
            .get(field)
            .ok_or_else(|| SchemaError::MissingField(field.clone()))?;
        matched |= value_contains(value, query);
    }
    Ok(matched)
}

/// Keeps records whose declared fields contain the query.
///
/// Records with an unknown or absent discriminant are excluded without an
/// error; a declared field absent on an eligible record is still an error.
pub fn filter_by_query(
    records: &[Record],
    query: &str,
    schema: &Schema,
    discriminant_field: &str,
) -> Result<Vec<Record>> {
    let query = NormalizedQuery::new(query);

    let mut out = Vec::new();
    for record in records {
        let Some(tag) = record.discriminant(discriminant_field) else {
            continue;
        };
        let Some(fields) = schema.fields_for(tag) else {
            continue;
        };
        if matches_declared_fields(record, fields, &query)? {
            out.push(record.clone());
        }
    }
    Ok(out)
}

/// Restricts records to the scope. Identity for `Scope::All`.
pub fn filter_by_scope(
    records: Vec<Record>,
    scope: &Scope,
    discriminant_field: &str,
) -> Vec<Record> {
    if scope.is_all() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| {
            record
                .discriminant(discriminant_field)
                .is_some_and(|tag| scope.admits(tag))
        })
        .collect()
}

/// Stable sort by the case-insensitive textual rendering of `field`.
///
/// Records with equal keys keep their relative order. Empty input returns
/// empty without computing any keys. A record missing the sort field is
/// [`SchemaError::MissingField`].
pub fn sort_by_field(records: Vec<Record>, field: &str) -> Result<Vec<Record>> {
    if records.is_empty() {
        return Ok(records);
    }

    let mut keyed = records
        .into_iter()
        .map(|record| {
            let key = record
                .get(field)
                .ok_or_else(|| SchemaError::MissingField(field.to_string()))?
                .to_string()
                .to_lowercase();
            Ok((key, record))
        })
        .collect::<Result<Vec<_>>>()?;

    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}

/// Orders records by the position of their `field` value in `order`.
///
/// Values absent from `order`, and records without the field, sort first.
pub fn sort_by_explicit_order(mut records: Vec<Record>, order: &[&str], field: &str) -> Vec<Record> {
    records.sort_by_cached_key(|record| {
        record
            .get(field)
            .and_then(|value| {
                let text = value.to_string();
                order.iter().position(|entry| *entry == text)
            })
            .map_or(-1, |index| index as isize)
    });
    records
}
