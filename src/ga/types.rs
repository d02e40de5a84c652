//! Gene and alphabet value types.
//!
//! A [`Gene`] wraps one symbol; an [`Alphabet`] is the finite set of symbols
//! a chromosome may draw from. Both are immutable once built.

use super::error::GaError;
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// Bound satisfied by every type usable as a gene symbol.
///
/// Implemented automatically for any `Clone + PartialEq + Debug + Send +
/// Sync + 'static` type, e.g. `char`, `u8`, `&'static str`.
pub trait Symbol: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {}

impl<T> Symbol for T where T: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {}

/// A single immutable symbol.
///
/// Genes compare by value. Cloning yields an independent gene carrying the
/// same symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gene<S> {
    symbol: S,
}

impl<S> Gene<S> {
    /// Wraps `symbol`.
    ///
    /// Alphabet membership is checked by the owning chromosome, not here.
    pub fn new(symbol: S) -> Self {
        Self { symbol }
    }

    /// The wrapped symbol.
    pub fn symbol(&self) -> &S {
        &self.symbol
    }

    /// Consumes the gene, returning its symbol.
    pub fn into_symbol(self) -> S {
        self.symbol
    }
}

impl<S: fmt::Display> fmt::Display for Gene<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbol.fmt(f)
    }
}

/// The allowed gene types of a chromosome.
///
/// Non-empty, duplicate-free, and cheap to clone: every chromosome of a
/// population shares one backing slice.
///
/// ```
/// use u_genetic::ga::Alphabet;
///
/// let dna = Alphabet::new(vec!['G', 'T', 'A', 'C']).unwrap();
/// assert_eq!(dna.len(), 4);
/// assert!(Alphabet::<char>::new(vec![]).is_err());
/// assert!(Alphabet::new(vec!['0', '0']).is_err());
/// ```
#[derive(Clone)]
pub struct Alphabet<S> {
    symbols: Arc<[S]>,
}

impl<S: Symbol> Alphabet<S> {
    /// Builds an alphabet from `symbols`.
    ///
    /// # Errors
    /// [`GaError::Configuration`] if `symbols` is empty or contains a
    /// duplicate.
    pub fn new(symbols: Vec<S>) -> Result<Self, GaError> {
        if symbols.is_empty() {
            return Err(GaError::Configuration("alphabet must not be empty".into()));
        }
        for (i, s) in symbols.iter().enumerate() {
            if symbols[..i].contains(s) {
                return Err(GaError::Configuration(format!(
                    "alphabet contains duplicate symbol {s:?}"
                )));
            }
        }
        Ok(Self {
            symbols: symbols.into(),
        })
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; alphabets are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols in construction order.
    pub fn symbols(&self) -> &[S] {
        &self.symbols
    }

    /// Whether `symbol` belongs to this alphabet.
    pub fn contains(&self, symbol: &S) -> bool {
        self.symbols.contains(symbol)
    }

    /// Index of `symbol`, if present.
    pub fn position(&self, symbol: &S) -> Option<usize> {
        self.symbols.iter().position(|s| s == symbol)
    }

    /// Draws a symbol uniformly.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> &S {
        &self.symbols[rng.random_range(0..self.symbols.len())]
    }

    /// Draws a symbol uniformly from every symbol except `current`.
    ///
    /// Returns `None` when no other symbol exists (single-symbol alphabet).
    /// If `current` is not a member, draws from the whole alphabet.
    pub fn sample_excluding<R: Rng>(&self, current: &S, rng: &mut R) -> Option<&S> {
        let n = self.symbols.len();
        match self.position(current) {
            None => Some(self.sample(rng)),
            Some(_) if n < 2 => None,
            Some(skip) => {
                let idx = rng.random_range(0..n - 1);
                let idx = if idx >= skip { idx + 1 } else { idx };
                Some(&self.symbols[idx])
            }
        }
    }
}

impl Alphabet<char> {
    /// Binary alphabet `{'0', '1'}`.
    pub fn binary() -> Self {
        Self {
            symbols: Arc::from(['0', '1']),
        }
    }
}

impl<S: PartialEq> PartialEq for Alphabet<S> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.symbols, &other.symbols) || self.symbols == other.symbols
    }
}

impl<S: fmt::Debug> fmt::Debug for Alphabet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&&*self.symbols).finish()
    }
}
