use std::ffi::{c_char, CStr};

use graph_walk_core::GraphError;

/// Status codes returned by the fallible C entry points.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GwStatus {
    Ok = 0,
    NullHandle = -1,
    OutOfRange = -2,
    NullOutput = -3,
}

impl GwStatus {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Ok),
            -1 => Some(Self::NullHandle),
            -2 => Some(Self::OutOfRange),
            -3 => Some(Self::NullOutput),
            _ => None,
        }
    }

    fn message(self) -> &'static CStr {
        match self {
            Self::Ok => c"ok",
            Self::NullHandle => c"graph handle is null",
            Self::OutOfRange => c"node index out of range",
            Self::NullOutput => c"output pointer is null",
        }
    }
}

impl From<&GraphError> for GwStatus {
    fn from(err: &GraphError) -> Self {
        match err {
            GraphError::OutOfRange { .. } => Self::OutOfRange,
            // Matrix construction is not reachable through the C ABI.
            GraphError::NonSquareMatrix { .. } => Self::OutOfRange,
        }
    }
}

/// Static NUL-terminated description of a status code.
///
/// The returned pointer is valid for the life of the process and must not
/// be freed. Unknown codes map to "unknown status".
#[no_mangle]
pub extern "C" fn gw_status_message(code: i32) -> *const c_char {
    GwStatus::from_code(code)
        .map(GwStatus::message)
        .unwrap_or(c"unknown status")
        .as_ptr()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for status in [
            GwStatus::Ok,
            GwStatus::NullHandle,
            GwStatus::OutOfRange,
            GwStatus::NullOutput,
        ] {
            assert_eq!(GwStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(GwStatus::from_code(7), None);
    }

    #[test]
    fn test_out_of_range_maps() {
        let err = GraphError::OutOfRange { node: 4, order: 2 };
        assert_eq!(GwStatus::from(&err), GwStatus::OutOfRange);
    }

    #[test]
    fn test_message_pointers() {
        let msg = unsafe { CStr::from_ptr(gw_status_message(-2)) };
        assert_eq!(msg.to_str(), Ok("node index out of range"));
        let unknown = unsafe { CStr::from_ptr(gw_status_message(42)) };
        assert_eq!(unknown.to_str(), Ok("unknown status"));
    }
}
