//! Reshaping of the remote service's flat output into a row-major matrix.
//!
//! The service answers with `{"lhs": [{"mwdata": [...], "mwsize": [rows, cols]}]}`.
//! [`normalize`] turns that envelope into a [`MatrixResult`]. Malformed shape
//! metadata never fails the call: it yields a degraded result that still
//! carries the raw envelope.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Failures while reading or reshaping a well-formed-looking envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReshapeError {
    #[error("response has no result entry under 'lhs'")]
    MissingResultEntry,

    #[error("result entry must be an object, got {0}")]
    MalformedEntry(String),

    #[error("'mwsize' must be a [rows, cols] pair, got {0}")]
    MalformedShape(String),

    #[error("invalid {axis} dimension: {value}")]
    InvalidDimension { axis: &'static str, value: String },

    #[error("shape {rows}x{cols} overflows")]
    ShapeOverflow { rows: usize, cols: usize },

    #[error("cannot reshape array of size {len} into shape ({rows},{cols})")]
    LengthMismatch { len: usize, rows: usize, cols: usize },

    #[error("'mwdata' element {index} is not a finite integer-convertible number: {value}")]
    InvalidCell { index: usize, value: String },
}

/// The magic matrix tool's output mapping.
///
/// `magic_square`, `rows` and `cols` are either all present or all absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixResult {
    /// Row-major matrix, one inner list per row.
    pub magic_square: Option<Vec<Vec<i64>>>,
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    /// The service response exactly as received.
    pub raw: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MatrixResult {
    /// A fully reshaped result.
    pub fn reshaped(matrix: Vec<Vec<i64>>, rows: usize, cols: usize, raw: Value) -> Self {
        Self {
            magic_square: Some(matrix),
            rows: Some(rows),
            cols: Some(cols),
            raw,
            error: None,
        }
    }

    /// The envelope did not carry data and shape; not an error.
    pub fn unexpected_shape(raw: Value) -> Self {
        Self {
            magic_square: None,
            rows: None,
            cols: None,
            raw,
            error: None,
        }
    }

    /// Extraction or reshaping failed; `error` describes why.
    pub fn degraded(raw: Value, error: &ReshapeError) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::unexpected_shape(raw)
        }
    }

    pub fn is_reshaped(&self) -> bool {
        self.magic_square.is_some()
    }
}

/// Flat data plus dimensions read from the first result entry.
#[derive(Debug, Clone, PartialEq)]
struct ResultEntry {
    data: Vec<i64>,
    rows: usize,
    cols: usize,
}

/// Convert a service envelope into a [`MatrixResult`].
pub fn normalize(raw: Value) -> MatrixResult {
    match read_first_entry(&raw) {
        Ok(Some(entry)) => match reshape_row_major(&entry.data, entry.rows, entry.cols) {
            Ok(matrix) => {
                debug!("Reshaped {} values into {}x{}", entry.data.len(), entry.rows, entry.cols);
                MatrixResult::reshaped(matrix, entry.rows, entry.cols, raw)
            }
            Err(e) => {
                warn!("Reshape failed: {}", e);
                MatrixResult::degraded(raw, &e)
            }
        },
        Ok(None) => {
            warn!("Service response does not carry mwdata/mwsize, returning raw envelope");
            MatrixResult::unexpected_shape(raw)
        }
        Err(e) => {
            warn!("Malformed service response: {}", e);
            MatrixResult::degraded(raw, &e)
        }
    }
}

/// Read `lhs[0]`. `Ok(None)` means data or a dimension is absent.
fn read_first_entry(raw: &Value) -> Result<Option<ResultEntry>, ReshapeError> {
    let entry = raw
        .get("lhs")
        .and_then(Value::as_array)
        .and_then(|lhs| lhs.first())
        .ok_or(ReshapeError::MissingResultEntry)?;
    let entry = entry
        .as_object()
        .ok_or_else(|| ReshapeError::MalformedEntry(entry.to_string()))?;

    // A missing `mwsize` is an unexpected shape; an explicit null is malformed.
    let (rows, cols) = match entry.get("mwsize") {
        None => return Ok(None),
        Some(Value::Array(size)) if size.len() == 2 => (&size[0], &size[1]),
        Some(other) => return Err(ReshapeError::MalformedShape(other.to_string())),
    };

    let flat = match entry.get("mwdata") {
        None | Some(Value::Null) => return Ok(None),
        Some(flat) => flat,
    };
    if rows.is_null() || cols.is_null() {
        return Ok(None);
    }

    let rows = dimension("rows", rows)?;
    let cols = dimension("cols", cols)?;

    // A scalar mwdata is a single-element array.
    let cells = match flat {
        Value::Array(cells) => cells.as_slice(),
        scalar => std::slice::from_ref(scalar),
    };
    let data = cells
        .iter()
        .enumerate()
        .map(|(index, cell)| to_integer(index, cell))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(ResultEntry { data, rows, cols }))
}

fn dimension(axis: &'static str, value: &Value) -> Result<usize, ReshapeError> {
    let invalid = || ReshapeError::InvalidDimension {
        axis,
        value: value.to_string(),
    };

    if let Some(n) = value.as_u64() {
        return usize::try_from(n).map_err(|_| invalid());
    }
    match value.as_f64() {
        Some(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= usize::MAX as f64 => {
            Ok(f as usize)
        }
        _ => Err(invalid()),
    }
}

fn to_integer(index: usize, cell: &Value) -> Result<i64, ReshapeError> {
    let invalid = || ReshapeError::InvalidCell {
        index,
        value: cell.to_string(),
    };

    if let Some(n) = cell.as_i64() {
        return Ok(n);
    }
    match cell.as_f64() {
        Some(f) if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            Ok(f.trunc() as i64)
        }
        _ => Err(invalid()),
    }
}

/// Split `flat` into `rows` rows of `cols` elements, filling row by row.
///
/// Element `i` lands at row `i / cols`, column `i % cols`.
pub fn reshape_row_major<T: Clone>(
    flat: &[T],
    rows: usize,
    cols: usize,
) -> Result<Vec<Vec<T>>, ReshapeError> {
    let expected = rows
        .checked_mul(cols)
        .ok_or(ReshapeError::ShapeOverflow { rows, cols })?;
    if expected != flat.len() {
        return Err(ReshapeError::LengthMismatch {
            len: flat.len(),
            rows,
            cols,
        });
    }

    if cols == 0 {
        return Ok(vec![Vec::new(); rows]);
    }
    Ok(flat.chunks(cols).map(<[T]>::to_vec).collect())
}

/// Inverse of [`reshape_row_major`].
pub fn flatten_row_major<T: Clone>(matrix: &[Vec<T>]) -> Vec<T> {
    matrix.iter().flatten().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn magic4_envelope() -> Value {
        json!({
            "lhs": [{
                "mwdata": [16, 2, 3, 13, 5, 11, 10, 8, 9, 7, 6, 12, 4, 14, 15, 1],
                "mwsize": [4, 4]
            }]
        })
    }

    #[test]
    fn test_normalize_magic4() {
        let raw = magic4_envelope();
        let result = normalize(raw.clone());

        assert_eq!(
            result.magic_square,
            Some(vec![
                vec![16, 2, 3, 13],
                vec![5, 11, 10, 8],
                vec![9, 7, 6, 12],
                vec![4, 14, 15, 1],
            ])
        );
        assert_eq!(result.rows, Some(4));
        assert_eq!(result.cols, Some(4));
        assert_eq!(result.raw, raw);
        assert_eq!(result.error, None);
    }

    #[test]
    fn test_reshape_flatten_round_trip() {
        let shapes = [(0, 0), (1, 1), (1, 6), (6, 1), (2, 3), (3, 2), (4, 4), (5, 0)];
        for (rows, cols) in shapes {
            let flat: Vec<i64> = (0..(rows * cols) as i64).map(|x| x * 7 - 3).collect();
            let matrix = reshape_row_major(&flat, rows, cols).unwrap();
            assert_eq!(matrix.len(), rows);
            assert!(matrix.iter().all(|row| row.len() == cols));
            assert_eq!(flatten_row_major(&matrix), flat, "shape {rows}x{cols}");
        }
    }

    #[test]
    fn test_reshape_places_elements_row_major() {
        let flat: Vec<usize> = (0..12).collect();
        let matrix = reshape_row_major(&flat, 3, 4).unwrap();
        for (i, value) in flat.iter().enumerate() {
            assert_eq!(matrix[i / 4][i % 4], *value);
        }
    }

    #[test]
    fn test_reshape_length_mismatch() {
        let err = reshape_row_major(&[1, 2, 3], 2, 2).unwrap_err();
        assert_eq!(
            err,
            ReshapeError::LengthMismatch {
                len: 3,
                rows: 2,
                cols: 2
            }
        );
    }

    #[test]
    fn test_reshape_overflow() {
        let err = reshape_row_major::<i64>(&[], usize::MAX, 2).unwrap_err();
        assert!(matches!(err, ReshapeError::ShapeOverflow { .. }));
    }

    #[test]
    fn test_missing_mwsize_is_unexpected_shape() {
        let raw = json!({ "lhs": [{ "mwdata": [1, 2, 3, 4] }] });
        let result = normalize(raw.clone());
        assert_eq!(result, MatrixResult::unexpected_shape(raw));
    }

    #[test]
    fn test_missing_mwdata_is_unexpected_shape() {
        let raw = json!({ "lhs": [{ "mwsize": [2, 2] }] });
        let result = normalize(raw.clone());
        assert_eq!(result.magic_square, None);
        assert_eq!(result.rows, None);
        assert_eq!(result.cols, None);
        assert_eq!(result.error, None);
        assert_eq!(result.raw, raw);
    }

    #[test]
    fn test_null_dimension_is_unexpected_shape() {
        let raw = json!({ "lhs": [{ "mwdata": [1], "mwsize": [null, 1] }] });
        let result = normalize(raw.clone());
        assert_eq!(result, MatrixResult::unexpected_shape(raw));
    }

    #[test]
    fn test_null_mwsize_is_degraded_with_error() {
        let raw = json!({ "lhs": [{ "mwdata": [1, 2, 3, 4], "mwsize": null }] });
        let result = normalize(raw.clone());
        assert!(!result.is_reshaped());
        assert_eq!(result.raw, raw);
        assert_eq!(
            result.error,
            Some(ReshapeError::MalformedShape("null".to_string()).to_string())
        );
    }

    #[test]
    fn test_non_object_entry_is_degraded_with_error() {
        let raw = json!({ "lhs": [5] });
        let result = normalize(raw.clone());
        assert_eq!(result.rows, None);
        assert_eq!(result.raw, raw);
        assert_eq!(
            result.error.as_deref(),
            Some("result entry must be an object, got 5")
        );
    }

    #[test]
    fn test_length_mismatch_is_degraded_with_error() {
        let raw = json!({ "lhs": [{ "mwdata": [1, 2, 3], "mwsize": [2, 2] }] });
        let result = normalize(raw.clone());
        assert!(!result.is_reshaped());
        assert_eq!(result.raw, raw);
        assert_eq!(
            result.error.as_deref(),
            Some("cannot reshape array of size 3 into shape (2,2)")
        );
    }

    #[test]
    fn test_empty_lhs_is_degraded_with_error() {
        let raw = json!({ "lhs": [] });
        let result = normalize(raw.clone());
        assert_eq!(result.raw, raw);
        assert_eq!(
            result.error,
            Some(ReshapeError::MissingResultEntry.to_string())
        );
    }

    #[test]
    fn test_three_element_mwsize_is_degraded() {
        let raw = json!({ "lhs": [{ "mwdata": [1, 2], "mwsize": [1, 2, 1] }] });
        let result = normalize(raw);
        assert!(matches!(result.error.as_deref(), Some(e) if e.contains("mwsize")));
    }

    #[test]
    fn test_negative_dimension_is_degraded() {
        let raw = json!({ "lhs": [{ "mwdata": [], "mwsize": [-1, 0] }] });
        let result = normalize(raw);
        assert_eq!(
            result.error.as_deref(),
            Some("invalid rows dimension: -1")
        );
    }

    #[test]
    fn test_float_cells_become_integers() {
        let raw = json!({ "lhs": [{ "mwdata": [1.0, 2.0, 3.9, -4.5], "mwsize": [2.0, 2] }] });
        let result = normalize(raw);
        assert_eq!(result.magic_square, Some(vec![vec![1, 2], vec![3, -4]]));
        assert_eq!(result.rows, Some(2));
    }

    #[test]
    fn test_non_numeric_cell_is_degraded() {
        let raw = json!({ "lhs": [{ "mwdata": [1, "x"], "mwsize": [1, 2] }] });
        let result = normalize(raw);
        assert_eq!(
            result.error.as_deref(),
            Some("'mwdata' element 1 is not a finite integer-convertible number: \"x\"")
        );
    }

    #[test]
    fn test_scalar_mwdata() {
        let raw = json!({ "lhs": [{ "mwdata": 1, "mwsize": [1, 1] }] });
        let result = normalize(raw);
        assert_eq!(result.magic_square, Some(vec![vec![1]]));
    }

    #[test]
    fn test_serialized_shape() {
        let raw = json!({ "lhs": [{ "mwdata": [5], "mwsize": [1, 1] }] });
        let value = serde_json::to_value(normalize(raw.clone())).unwrap();
        assert_eq!(
            value,
            json!({ "magic_square": [[5]], "rows": 1, "cols": 1, "raw": raw })
        );

        let raw = json!({ "lhs": [{}] });
        let value = serde_json::to_value(normalize(raw.clone())).unwrap();
        assert_eq!(
            value,
            json!({ "magic_square": null, "rows": null, "cols": null, "raw": raw })
        );
    }
}
