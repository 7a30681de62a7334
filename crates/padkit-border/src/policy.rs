//! Border policies
//!
//! How pixels outside the original image are synthesized:
//!
//! ```text
//!   Constant   000|abcdefgh|000
//!   Replicate  aaa|abcdefgh|hhh
//!   Reflect    dcb|abcdefgh|gfe   (see `extend` for the exact offsets)
//! ```

use crate::error::{BorderError, BorderResult};

/// Border extension policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum BorderPolicy {
    /// Border left at the pixel format's zero value
    #[default]
    Constant = 0,
    /// Nearest edge pixel repeated outward
    Replicate = 1,
    /// Interior mirrored about the edge
    Reflect = 2,
}

impl BorderPolicy {
    /// All recognized policies.
    pub const ALL: [BorderPolicy; 3] = [
        BorderPolicy::Constant,
        BorderPolicy::Replicate,
        BorderPolicy::Reflect,
    ];

    /// Create a `BorderPolicy` from its integer code.
    ///
    /// # Errors
    ///
    /// Returns [`BorderError::UnknownBorderPolicy`] if `code` is not 0, 1, or 2.
    pub fn from_code(code: i32) -> BorderResult<Self> {
        match code {
            0 => Ok(BorderPolicy::Constant),
            1 => Ok(BorderPolicy::Replicate),
            2 => Ok(BorderPolicy::Reflect),
            _ => Err(BorderError::UnknownBorderPolicy(code)),
        }
    }

    /// Integer code of this policy.
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for BorderPolicy {
    type Error = BorderError;

    fn try_from(code: i32) -> BorderResult<Self> {
        Self::from_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        for policy in BorderPolicy::ALL {
            assert_eq!(BorderPolicy::from_code(policy.code()).unwrap(), policy);
        }
        assert_eq!(BorderPolicy::Reflect.code(), 2);
    }

    #[test]
    fn test_unknown_code() {
        let err = BorderPolicy::try_from(99).unwrap_err();
        assert!(matches!(err, BorderError::UnknownBorderPolicy(99)));
        assert!(BorderPolicy::from_code(-1).is_err());
        assert!(BorderPolicy::from_code(3).is_err());
    }
}
