/// Observer invoked with the full token list after every mutation.
pub type ChangeListener = Box<dyn FnMut(&[String])>;

/// Ordered list of committed tokens. Duplicates are allowed and insertion
/// order is significant. The vector is replaced wholesale on every
/// mutation rather than edited in place, and the observer fires
/// synchronously with the new list whenever (and only whenever) the list
/// actually changes.
pub struct TokenList {
    tokens: Vec<String>,
    on_change: Option<ChangeListener>,
}

impl TokenList {
    pub fn new(tokens: Vec<String>) -> Self {
        Self {
            tokens,
            on_change: None,
        }
    }

    pub fn set_on_change(&mut self, listener: ChangeListener) {
        self.on_change = Some(listener);
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Append a token. The caller guarantees the text is non-empty.
    pub fn push(&mut self, text: String) {
        let mut next = self.tokens.clone();
        next.push(text);
        self.tokens = next;
        self.notify();
    }

    /// Remove the token at `index`, or the last token when `index` is
    /// `None`. Removing from an empty list, or with an out-of-range
    /// index, is a silent no-op: no replacement, no observer call.
    pub fn remove(&mut self, index: Option<usize>) -> Option<String> {
        let idx = match index {
            Some(i) if i < self.tokens.len() => i,
            Some(_) => return None,
            None => self.tokens.len().checked_sub(1)?,
        };
        let mut next = self.tokens.clone();
        let removed = next.remove(idx);
        self.tokens = next;
        self.notify();
        Some(removed)
    }

    fn notify(&mut self) {
        if let Some(listener) = self.on_change.as_mut() {
            listener(&self.tokens);
        }
    }
}

impl std::fmt::Debug for TokenList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenList")
            .field("tokens", &self.tokens)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
