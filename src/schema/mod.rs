//! Heuristic column resolution.
//!
//! Benchmark harnesses rarely agree on column names (`succ`, `success_rate`,
//! `SuccessRate`, ...). A `ColumnSpec` lists substrings that identify a semantic
//! role; resolution picks the physical header deterministically:
//!
//! 1. headers are lower-cased once
//! 2. candidates are tried in the order given
//! 3. for a candidate, the left-most header containing it wins
//!
//! Resolution is a pure function of `(headers, candidates)`.

use tracing::info;

use crate::domain::{BenchmarkTable, ColumnSpec, ResolvedSchema};
use crate::error::AppError;

/// Resolve one `ColumnSpec` against a header list, returning the header as written.
pub fn resolve_column(headers: &[String], spec: &ColumnSpec) -> Result<String, AppError> {
    let lowered: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();

    spec.candidates
        .iter()
        .find_map(|candidate| {
            let candidate = candidate.to_lowercase();
            lowered.iter().position(|h| h.contains(&candidate))
        })
        .map(|idx| headers[idx].clone())
        .ok_or_else(|| AppError::SchemaResolution {
            semantic: spec.semantic.clone(),
            candidates: spec.candidates.clone(),
            headers: headers.to_vec(),
        })
}

/// Resolve `semantic` in `table` using `candidates`.
pub fn resolve(table: &BenchmarkTable, semantic: &str, candidates: &[&str]) -> Result<String, AppError> {
    resolve_column(&table.headers, &ColumnSpec::new(semantic, candidates))
}

/// Resolve every column; the first unresolved one fails the whole table.
pub fn resolve_schema(table: &BenchmarkTable, specs: &[ColumnSpec]) -> Result<ResolvedSchema, AppError> {
    let mut schema = ResolvedSchema::default();
    for spec in specs {
        let column = resolve_column(&table.headers, spec)?;
        info!(
            table = %table.source.display(),
            semantic = %spec.semantic,
            column = %column,
            "resolved column"
        );
        schema.insert(spec.semantic.clone(), column);
    }
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn success_spec() -> ColumnSpec {
        ColumnSpec::new("success", &["succ", "rate", "success"])
    }

    #[test]
    fn earlier_candidate_beats_earlier_header() {
        // `rate` appears first, but `succ` has priority.
        let h = headers(&["alpha", "rate_hz", "succ"]);
        assert_eq!(resolve_column(&h, &success_spec()).unwrap(), "succ");
    }

    #[test]
    fn falls_back_to_later_candidates() {
        let h = headers(&["alpha", "Rate"]);
        assert_eq!(resolve_column(&h, &success_spec()).unwrap(), "Rate");
    }

    #[test]
    fn left_most_header_wins_a_tie() {
        let h = headers(&["comm_mb", "comm_bytes"]);
        let spec = ColumnSpec::new("comm", &["comm", "bytes", "mb"]);
        assert_eq!(resolve_column(&h, &spec).unwrap(), "comm_mb");
    }

    #[test]
    fn matching_is_case_insensitive_and_preserves_case() {
        let h = headers(&["ALPHA", "SuccessRate"]);
        assert_eq!(resolve_column(&h, &success_spec()).unwrap(), "SuccessRate");
        assert_eq!(resolve_column(&h, &ColumnSpec::new("alpha", &["Alpha"])).unwrap(), "ALPHA");
    }

    #[test]
    fn unresolved_names_the_semantic_column() {
        let h = headers(&["alpha", "time_ms"]);
        let err = resolve_column(&h, &success_spec()).unwrap_err();
        match err {
            AppError::SchemaResolution { semantic, headers, .. } => {
                assert_eq!(semantic, "success");
                assert_eq!(headers, vec!["alpha", "time_ms"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn schema_keeps_column_order() {
        let table = BenchmarkTable {
            source: "mem.csv".into(),
            headers: headers(&["n", "t", "comm_mb"]),
            rows: Vec::new(),
        };
        let specs = [
            ColumnSpec::new("threshold", &["t", "threshold"]),
            ColumnSpec::new("comm", &["comm", "bytes", "mb"]),
        ];
        let schema = resolve_schema(&table, &specs).unwrap();
        let pairs: Vec<(&str, &str)> = schema.iter().collect();
        assert_eq!(pairs, vec![("threshold", "t"), ("comm", "comm_mb")]);
    }

    #[test]
    fn resolve_reads_table_headers() {
        let table = BenchmarkTable {
            source: "mem.csv".into(),
            headers: headers(&["Alpha", "succ_rate"]),
            rows: Vec::new(),
        };
        assert_eq!(resolve(&table, "alpha", &["alpha"]).unwrap(), "Alpha");
        assert_eq!(resolve(&table, "success", &["succ", "rate", "success"]).unwrap(), "succ_rate");
    }

    fn other_header() -> impl Strategy<Value = String> {
        // No `s`, so none of these can contain `succ`.
        "[a-rt-zA-RT-Z0-9_]{1,12}"
    }

    fn success_header() -> impl Strategy<Value = String> {
        ("[a-z_]{0,4}", prop::bool::ANY, "[a-z_]{0,4}").prop_map(|(pre, upper, post)| {
            let word = if upper { "SUCCESS" } else { "success" };
            format!("{pre}{word}{post}")
        })
    }

    proptest! {
        #[test]
        fn finds_the_success_column(
            mut h in prop::collection::vec(other_header(), 0..8),
            success in success_header(),
            pos in any::<prop::sample::Index>(),
        ) {
            let at = pos.index(h.len() + 1);
            h.insert(at, success.clone());

            let first = resolve_column(&h, &success_spec()).unwrap();
            let second = resolve_column(&h, &success_spec()).unwrap();
            prop_assert_eq!(&first, &success);
            prop_assert_eq!(first, second);
        }
    }
}
