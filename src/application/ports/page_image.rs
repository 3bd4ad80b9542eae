/// A single page rendered to encoded image bytes (PNG for rendered PDF
/// pages; uploaded images pass through in their original encoding).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage(Vec<u8>);

impl PageImage {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
