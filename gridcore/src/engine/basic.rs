//! Default row-model engine.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use super::{RowModel, RowModelEngine, RowModelInput};
use crate::row::GridRow;
use crate::value::CellValue;

/// The bundled row-model engine.
///
/// Applies per-column filters, a fuzzy global filter, a stable multi-key
/// sort, and page slicing, in that order. Row order is preserved except
/// where sorting dictates otherwise; the global filter never reorders.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicEngine;

impl BasicEngine {
    /// Check one row against one column filter.
    fn filter_matches<R: GridRow>(row: &R, column_id: &str, filter: &CellValue) -> bool {
        let field = row.field(column_id);
        match filter {
            CellValue::Null => true,
            CellValue::Bool(b) => field == CellValue::Bool(*b),
            CellValue::Number(n) => match field {
                CellValue::Number(v) => v == *n,
                other => other.as_text().contains(&CellValue::Number(*n).as_text()),
            },
            CellValue::Text(query) => {
                let query = query.to_lowercase();
                query.is_empty() || field.as_text().to_lowercase().contains(&query)
            }
        }
    }

    /// Check one row against the fuzzy global filter.
    fn global_matches<R: GridRow>(
        row: &R,
        input: &RowModelInput<'_, R>,
        pattern: &Pattern,
        matcher: &mut Matcher,
    ) -> bool {
        let mut buf = Vec::new();
        input.columns.iter().any(|column| {
            let text = row.field(&column.id).as_text();
            let haystack = Utf32Str::new(&text, &mut buf);
            pattern.score(haystack, matcher).is_some()
        })
    }
}

impl<R: GridRow> RowModelEngine<R> for BasicEngine {
    fn compute(&self, input: RowModelInput<'_, R>) -> RowModel {
        // Per-column filters
        let mut indices: Vec<usize> = (0..input.rows.len())
            .filter(|&i| {
                input
                    .column_filters
                    .iter()
                    .all(|f| Self::filter_matches(&input.rows[i], &f.column_id, &f.value))
            })
            .collect();

        // Global fuzzy filter
        if !input.global_filter.is_empty() {
            let mut matcher = Matcher::new(Config::DEFAULT);
            let pattern = Pattern::new(
                input.global_filter,
                CaseMatching::Ignore,
                Normalization::Smart,
                AtomKind::Fuzzy,
            );
            indices.retain(|&i| {
                Self::global_matches(&input.rows[i], &input, &pattern, &mut matcher)
            });
        }

        // Stable multi-key sort
        if !input.sorting.is_empty() {
            indices.sort_by(|&a, &b| {
                for key in input.sorting {
                    let va = input.rows[a].field(&key.column_id);
                    let vb = input.rows[b].field(&key.column_id);
                    let ord = if key.descending {
                        vb.compare(&va)
                    } else {
                        va.compare(&vb)
                    };
                    if ord != std::cmp::Ordering::Equal {
                        return ord;
                    }
                }
                std::cmp::Ordering::Equal
            });
        }

        let row_count = indices.len();

        // Page slicing
        let Some(pagination) = input.pagination else {
            return RowModel {
                visible_rows: indices,
                row_count,
                page_count: 1,
                can_previous_page: false,
                can_next_page: false,
            };
        };

        let page_size = pagination.page_size.max(1);
        let page_count = row_count.div_ceil(page_size);
        let start = pagination.page_index.saturating_mul(page_size);
        let visible_rows = if start >= row_count {
            // Out-of-range page (skip-reset can leave one); empty page
            Vec::new()
        } else {
            indices[start..(start + page_size).min(row_count)].to_vec()
        };

        RowModel {
            visible_rows,
            row_count,
            page_count,
            can_previous_page: pagination.page_index > 0,
            can_next_page: pagination.page_index + 1 < page_count,
        }
    }
}
