//! Serde support for the wrapper types: group elements travel as
//! compressed-affine byte strings, scalars as fixed-width little-endian
//! integers.

use crate::bls12_381::{BLSGt, BLSScalar, BLSG1, BLSG2};
use crate::traits::{Group, Scalar};

pub(crate) mod obj_serde {
    use ark_std::fmt;
    use ark_std::vec::Vec;
    use serde::de::{Error as DeError, SeqAccess, Visitor};

    /// A visitor collecting raw bytes from either a byte-string or a
    /// sequence encoding, so both binary and self-describing formats work.
    pub(crate) struct BytesVisitor;

    impl<'de> Visitor<'de> for BytesVisitor {
        type Value = Vec<u8>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a valid byte string")
        }

        fn visit_bytes<E: DeError>(self, v: &[u8]) -> core::result::Result<Vec<u8>, E> {
            Ok(v.to_vec())
        }

        fn visit_byte_buf<E: DeError>(self, v: Vec<u8>) -> core::result::Result<Vec<u8>, E> {
            Ok(v)
        }

        fn visit_seq<A: SeqAccess<'de>>(
            self,
            mut seq: A,
        ) -> core::result::Result<Vec<u8>, A::Error> {
            let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(byte) = seq.next_element::<u8>()? {
                bytes.push(byte);
            }
            Ok(bytes)
        }
    }
}

macro_rules! serialize_deserialize_scalar {
    ($t:ident) => {
        impl serde::Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_bytes(&Scalar::to_bytes(self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let bytes = deserializer.deserialize_bytes(obj_serde::BytesVisitor)?;
                <$t as Scalar>::from_bytes(&bytes).map_err(serde::de::Error::custom)
            }
        }
    };
}

macro_rules! serialize_deserialize_group {
    ($g:ident) => {
        impl serde::Serialize for $g {
            fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_bytes(&self.to_compressed_bytes())
            }
        }

        impl<'de> serde::Deserialize<'de> for $g {
            fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let bytes = deserializer.deserialize_bytes(obj_serde::BytesVisitor)?;
                $g::from_compressed_bytes(&bytes).map_err(serde::de::Error::custom)
            }
        }
    };
}

serialize_deserialize_scalar!(BLSScalar);
serialize_deserialize_group!(BLSG1);
serialize_deserialize_group!(BLSG2);
serialize_deserialize_group!(BLSGt);
