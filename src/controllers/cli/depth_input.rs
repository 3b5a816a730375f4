use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DepthInputError {
    #[error("'{0}' is not a valid depth")]
    InvalidValue(String),
    #[error("'{0}' is not a valid depth for any fractal, enter a single digit")]
    TooManyDigits(String),
}

/// Checks the text typed into the depth field.
///
/// Empty text means nothing has been entered yet and yields `Ok(None)`. Only
/// a single non-negative digit gets through; whether that digit suits the
/// chosen fractal is decided later by [`RecursionDepth`](crate::core::data::recursion_depth::RecursionDepth).
pub fn parse_depth_input(text: &str) -> Result<Option<u32>, DepthInputError> {
    if text.is_empty() {
        return Ok(None);
    }

    let value = match text.parse::<i32>() {
        Ok(value) if !text.contains('-') => value,
        _ => return Err(DepthInputError::InvalidValue(text.to_owned())),
    };

    if text.chars().count() >= 2 {
        return Err(DepthInputError::TooManyDigits(text.to_owned()));
    }

    u32::try_from(value)
        .map(Some)
        .map_err(|_| DepthInputError::InvalidValue(text.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_not_an_error() {
        assert_eq!(parse_depth_input(""), Ok(None));
    }

    #[test]
    fn test_single_digits() {
        assert_eq!(parse_depth_input("0"), Ok(Some(0)));
        assert_eq!(parse_depth_input("5"), Ok(Some(5)));
        assert_eq!(parse_depth_input("9"), Ok(Some(9)));
    }

    #[test]
    fn test_non_numeric_input() {
        assert_eq!(parse_depth_input("x"), Err(DepthInputError::InvalidValue("x".to_owned())));
        assert_eq!(parse_depth_input("3.5"), Err(DepthInputError::InvalidValue("3.5".to_owned())));
        assert_eq!(parse_depth_input("+"), Err(DepthInputError::InvalidValue("+".to_owned())));
    }

    #[test]
    fn test_anything_with_a_minus_sign() {
        assert_eq!(parse_depth_input("-1"), Err(DepthInputError::InvalidValue("-1".to_owned())));
        assert_eq!(parse_depth_input("-0"), Err(DepthInputError::InvalidValue("-0".to_owned())));
    }

    #[test]
    fn test_multi_digit_numbers() {
        assert_eq!(parse_depth_input("10"), Err(DepthInputError::TooManyDigits("10".to_owned())));
        assert_eq!(parse_depth_input("07"), Err(DepthInputError::TooManyDigits("07".to_owned())));
        assert_eq!(parse_depth_input("+5"), Err(DepthInputError::TooManyDigits("+5".to_owned())));
    }

    #[test]
    fn test_numbers_outside_i32_are_invalid() {
        for text in ["2147483648", "9999999999", "99999999999999999999"] {
            assert_eq!(
                parse_depth_input(text),
                Err(DepthInputError::InvalidValue(text.to_owned()))
            );
        }
    }

    #[test]
    fn test_largest_i32_has_too_many_digits() {
        assert_eq!(
            parse_depth_input("2147483647"),
            Err(DepthInputError::TooManyDigits("2147483647".to_owned()))
        );
    }
}
