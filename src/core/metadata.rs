use crate::core::locator::RawCaptures;
use crate::domain::model::ResultFileMetadata;
use crate::utils::error::{PlotError, Result};

/// Convert the four filename captures into integers, in `(N, wc, wr, iter)`
/// order. Pure; the pattern already restricts the captures to digit runs, so
/// a parse failure here means an upstream bug rather than bad user input.
pub fn extract(captures: &RawCaptures) -> Result<ResultFileMetadata> {
    Ok(ResultFileMetadata {
        block_length: captures.block_length.parse()?,
        column_weight: captures.column_weight.parse()?,
        row_weight: captures.row_weight.parse()?,
        iterations: captures.iterations.parse()?,
    })
}

/// Code rate `R = (N - N*wc/wr) / N`, with `N*wc/wr` approximating the
/// parity-check count M. Real division throughout; the value is stored
/// unrounded and only formatted to four decimals at presentation points.
/// `wc >= wr` is deliberately not rejected; the rate simply comes out
/// non-positive.
pub fn code_rate(metadata: &ResultFileMetadata) -> Result<f64> {
    if metadata.row_weight == 0 {
        return Err(PlotError::DivisionByZero);
    }

    let n = f64::from(metadata.block_length);
    let parity = n * f64::from(metadata.column_weight) / f64::from(metadata.row_weight);
    Ok((n - parity) / n)
}
