use crate::casing::{classify, set_casing, CasingStyle};
use crate::error::CasingError;
use crate::{Conversion, Detection};
use log::{debug, trace};
use rayon::prelude::*;

/// Classify every input in parallel. Results keep the input order.
pub fn detect_all<S>(inputs: &[S]) -> Vec<Detection>
where
    S: AsRef<str> + Sync,
{
    debug!("classifying {} input(s)", inputs.len());

    inputs
        .par_iter()
        .map(|input| {
            let input = input.as_ref();
            let style = classify(input);
            trace!("{:?} -> {}", input, style);
            Detection {
                input: input.to_string(),
                style,
            }
        })
        .collect()
}

/// Convert every input to `target` in parallel. Results keep the input order.
///
/// The target is checked once up front, so an invalid target fails before
/// any input is touched.
pub fn convert_all<S>(inputs: &[S], target: CasingStyle) -> Result<Vec<Conversion>, CasingError>
where
    S: AsRef<str> + Sync,
{
    if !target.is_target() {
        return Err(CasingError::InvalidTargetStyle(target));
    }

    debug!("converting {} input(s) to {}", inputs.len(), target);

    inputs
        .par_iter()
        .map(|input| {
            let input = input.as_ref();
            let output = set_casing(input, target)?;
            trace!("{:?} -> {:?}", input, output);
            Ok(Conversion {
                input: input.to_string(),
                detected: classify(input),
                target,
                output,
            })
        })
        .collect()
}
