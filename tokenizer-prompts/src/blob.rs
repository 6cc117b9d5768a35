//! Raw multi-modal payloads attached to chat messages.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::codec::DocumentCodec;

/// Modality assigned when none is given.
pub const DEFAULT_MODALITY: &str = "image";

/// A piece of non-text data tagged with its modality (image, audio, ...).
///
/// The modality is a free-form string so that individual models can define
/// their own kinds. On the wire `data` is a standard padded base64 string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiModalBlob {
    #[serde(with = "blob_data")]
    data: Bytes,
    #[serde(default = "default_modality")]
    modality: String,
}

fn default_modality() -> String {
    DEFAULT_MODALITY.to_owned()
}

impl MultiModalBlob {
    /// Creates a blob with an explicit modality.
    #[must_use]
    pub fn new(data: impl Into<Bytes>, modality: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            modality: modality.into(),
        }
    }

    /// Creates an image blob.
    #[must_use]
    pub fn image(data: impl Into<Bytes>) -> Self {
        Self::new(data, DEFAULT_MODALITY)
    }

    /// Replaces the modality tag.
    #[must_use]
    pub fn with_modality(mut self, modality: impl Into<String>) -> Self {
        self.modality = modality.into();
        self
    }

    /// Returns the raw payload.
    #[must_use]
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Returns the modality tag.
    #[must_use]
    pub fn modality(&self) -> &str {
        &self.modality
    }

    /// Returns `true` when the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Default for MultiModalBlob {
    fn default() -> Self {
        Self::image(Bytes::new())
    }
}

impl DocumentCodec for MultiModalBlob {
    const NAME: &'static str = "multi_modal_blob";
}

/// Base64 codec for blob payloads.
///
/// Decoding also accepts an array of byte values, the form written by older
/// producers before payloads were base64 encoded.
mod blob_data {
    use std::fmt;

    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use bytes::Bytes;
    use serde::de::{self, SeqAccess, Visitor};
    use serde::{Deserializer, Serializer};

    use crate::error::INVALID_BASE64;

    pub(super) fn serialize<S>(data: &Bytes, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(data))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Bytes, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BlobVisitor)
    }

    struct BlobVisitor;

    impl<'de> Visitor<'de> for BlobVisitor {
        type Value = Bytes;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a base64 string or an array of byte values")
        }

        fn visit_str<E>(self, value: &str) -> Result<Bytes, E>
        where
            E: de::Error,
        {
            STANDARD
                .decode(value)
                .map(Bytes::from)
                .map_err(|err| E::custom(format_args!("{INVALID_BASE64}: {err}")))
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Bytes, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut buf = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(byte) = seq.next_element::<u8>()? {
                buf.push(byte);
            }
            Ok(Bytes::from(buf))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn default_blob_is_empty_image() {
        let blob = MultiModalBlob::default();
        assert_eq!(blob.modality(), "image");
        assert!(blob.is_empty());

        let value = serde_json::to_value(&blob).expect("serialize");
        assert_eq!(value, json!({ "data": "", "modality": "image" }));
    }

    #[test]
    fn missing_modality_defaults_to_image() {
        let blob = MultiModalBlob::from_document(&json!({ "data": "" })).into_value();
        assert_eq!(blob, MultiModalBlob::default());
        assert_eq!(blob.to_document()["modality"], "image");
    }

    #[test]
    fn data_is_base64_on_the_wire() {
        let blob = MultiModalBlob::new(vec![1_u8, 2, 3], "audio");
        let value = serde_json::to_value(&blob).expect("serialize");
        assert_eq!(value["data"], "AQID");
        assert_eq!(value["modality"], "audio");

        let decoded: MultiModalBlob = serde_json::from_value(value).expect("deserialize");
        assert_eq!(decoded, blob);
    }

    #[test]
    fn accepts_legacy_byte_arrays() {
        let decoded: MultiModalBlob =
            serde_json::from_value(json!({ "data": [4, 5, 6], "modality": "book" }))
                .expect("legacy array");
        assert_eq!(decoded.data().to_vec(), vec![4, 5, 6]);
        assert_eq!(decoded.modality(), "book");
    }

    #[test]
    fn rejects_out_of_range_bytes() {
        let err = serde_json::from_value::<MultiModalBlob>(json!({
            "data": [1, 256],
            "modality": "image",
        }))
        .expect_err("256 is not a byte");
        assert!(err.to_string().contains("u8"));
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = serde_json::from_value::<MultiModalBlob>(json!({
            "data": "not base64!",
            "modality": "image",
        }))
        .expect_err("invalid base64");
        assert!(err.to_string().starts_with(crate::error::INVALID_BASE64));
    }

    #[test]
    fn binary_payload_survives_round_trip() {
        let payload: Vec<u8> = (0..=255).collect();
        let blob = MultiModalBlob::image(payload.clone());
        let text = serde_json::to_string(&blob).expect("serialize");
        let decoded: MultiModalBlob = serde_json::from_str(&text).expect("deserialize");
        assert_eq!(decoded.data().to_vec(), payload);
    }
}
