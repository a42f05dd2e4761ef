//!
//! This module holds traits for extending functionalities for existing datatypes
//! & inbuilt datatypes.
//!

use error_stack::ResultExt;
use serde::Deserialize;

use crate::errors::{self, CustomResult};

///
/// Extending functionalities of `bytes::Bytes`
///
pub trait BytesExt<T> {
    ///
    /// Convert `bytes::Bytes` into type `<T>` using `serde::Deserialize`
    ///
    fn parse_struct<'de>(&'de self, type_name: &str) -> CustomResult<T, errors::ParsingError>
    where
        T: Deserialize<'de>;
}

impl<T> BytesExt<T> for bytes::Bytes {
    fn parse_struct<'de>(&'de self, type_name: &str) -> CustomResult<T, errors::ParsingError>
    where
        T: Deserialize<'de>,
    {
        use bytes::Buf;

        serde_json::from_slice::<T>(self.chunk())
            .change_context(errors::ParsingError)
            .attach_printable_lazy(|| format!("Unable to parse {type_name} from bytes"))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Meta {
        result: bool,
    }

    #[test]
    fn parse_struct_reads_json_bytes() {
        let bytes = bytes::Bytes::from_static(br#"{"result":true}"#);
        let meta: Meta = bytes.parse_struct("Meta").unwrap();

        assert_eq!(meta, Meta { result: true });
    }

    #[test]
    fn parse_struct_reports_malformed_payloads() {
        let bytes = bytes::Bytes::from_static(b"<html>");
        let result: CustomResult<Meta, errors::ParsingError> = bytes.parse_struct("Meta");

        assert!(result.is_err());
    }
}
