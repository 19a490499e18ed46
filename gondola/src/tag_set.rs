//! Catalogue of part-of-speech tags.

use hashbrown::HashMap;

use crate::errors::{GondolaError, Result};

/// Tag symbols of the BNC Basic (C5) tagset, including ambiguity tags.
pub const BNC_C5: &[&str] = &[
    "AJ0", "AJC", "AJS", "AT0", "AV0", "AVP", "AVQ", "CJC", "CJS", "CJT", "CRD", "DPS", "DT0",
    "DTQ", "EX0", "ITJ", "NN0", "NN1", "NN2", "NP0", "ORD", "PNI", "PNP", "PNQ", "PNX", "POS",
    "PRF", "PRP", "PUL", "PUN", "PUQ", "PUR", "TO0", "UNC", "VBB", "VBD", "VBG", "VBI", "VBN",
    "VBZ", "VDB", "VDD", "VDG", "VDI", "VDN", "VDZ", "VHB", "VHD", "VHG", "VHI", "VHN", "VHZ",
    "VM0", "VVB", "VVD", "VVG", "VVI", "VVN", "VVZ", "XX0", "ZZ0", "AJ0-AV0", "AJ0-VVN",
    "AJ0-VVD", "AJ0-NN1", "AJ0-VVG", "AVP-PRP", "AVQ-CJS", "CJS-PRP", "CJT-DT0", "CRD-PNI",
    "NN1-NP0", "NN1-VVB", "NN1-VVG", "NN2-VVZ", "VVD-VVN", "AV0-AJ0", "VVN-AJ0", "VVD-AJ0",
    "NN1-AJ0", "VVG-AJ0", "PRP-AVP", "CJS-AVQ", "PRP-CJS", "DT0-CJT", "PNI-CRD", "NP0-NN1",
    "VVB-NN1", "VVG-NN1", "VVZ-NN2", "VVN-VVD",
];

/// Immutable catalogue of tag symbols with dense integer indices.
///
/// Every vector and matrix of a [`Model`](crate::Model) is indexed by the
/// position of a symbol in this catalogue.
///
/// # Examples
///
/// ```
/// use gondola::TagSet;
///
/// let tag_set = TagSet::new(["AT0", "NN1", "VVZ"]).unwrap();
/// assert_eq!(Some(1), tag_set.tag_id("NN1"));
/// assert_eq!(Some("NN1"), tag_set.symbol(1));
/// ```
pub struct TagSet {
    ids: HashMap<String, usize>,
    symbols: Vec<String>,
}

impl TagSet {
    /// Creates a new tag catalogue from an ordered sequence of symbols.
    ///
    /// # Arguments
    ///
    /// * `symbols` - Tag symbols in catalogue order.
    ///
    /// # Errors
    ///
    /// [`GondolaError::InvalidArgument`] will be returned if `symbols` is
    /// empty or contains a duplicate.
    pub fn new<I, S>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ids = HashMap::new();
        let mut syms = vec![];
        for symbol in symbols {
            let symbol = symbol.into();
            if ids.insert(symbol.clone(), syms.len()).is_some() {
                return Err(GondolaError::invalid_argument(
                    "symbols",
                    format!("duplicate tag symbol: {}", symbol),
                ));
            }
            syms.push(symbol);
        }
        if syms.is_empty() {
            return Err(GondolaError::invalid_argument("symbols", "no tag symbols"));
        }
        Ok(Self { ids, symbols: syms })
    }

    /// Gets the index of a tag symbol.
    pub fn tag_id(&self, symbol: &str) -> Option<usize> {
        self.ids.get(symbol).copied()
    }

    /// Gets the tag symbol at an index.
    pub fn symbol(&self, id: usize) -> Option<&str> {
        self.symbols.get(id).map(|s| s.as_str())
    }

    /// Gets all tag symbols in catalogue order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Gets the number of tags.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Checks whether the catalogue is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for TagSet {
    fn default() -> Self {
        Self::new(BNC_C5.iter().copied()).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_set_empty() {
        let tag_set = TagSet::new(Vec::<String>::new());

        assert!(tag_set.is_err());
        assert_eq!(
            "InvalidArgumentError: symbols: no tag symbols",
            &tag_set.err().unwrap().to_string()
        );
    }

    #[test]
    fn test_tag_set_duplicate() {
        let tag_set = TagSet::new(["NN1", "VVZ", "NN1"]);

        assert!(tag_set.is_err());
        assert_eq!(
            "InvalidArgumentError: symbols: duplicate tag symbol: NN1",
            &tag_set.err().unwrap().to_string()
        );
    }

    #[test]
    fn test_index_bijection() {
        let tag_set = TagSet::default();

        for (id, symbol) in tag_set.symbols().iter().enumerate() {
            assert_eq!(Some(id), tag_set.tag_id(symbol));
            assert_eq!(Some(symbol.as_str()), tag_set.symbol(id));
        }
    }

    #[test]
    fn test_default_catalogue() {
        let tag_set = TagSet::default();

        assert_eq!(BNC_C5.len(), tag_set.len());
        assert_eq!(Some(0), tag_set.tag_id("AJ0"));
        assert_eq!(Some(BNC_C5.len() - 1), tag_set.tag_id("VVN-VVD"));
    }

    #[test]
    fn test_unknown_symbol() {
        let tag_set = TagSet::default();

        assert_eq!(None, tag_set.tag_id("ZZZ"));
        assert_eq!(None, tag_set.symbol(BNC_C5.len()));
    }
}
