/// Append-only output written during [`crate::Generator::generate`].
///
/// This is implemented for
/// - `String` to produce text
/// - `Vec<u8>` to produce the UTF-8 encoding of the text
///
/// `len` is in bytes for both, and is what `max_len` is checked against.
pub trait Sink {
    fn new() -> Self;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn push_char(&mut self, c: char);
    fn push_str(&mut self, s: &str);
}

impl Sink for String {
    fn new() -> Self {
        Default::default()
    }
    fn len(&self) -> usize {
        self.len()
    }
    fn push_char(&mut self, c: char) {
        self.push(c)
    }
    fn push_str(&mut self, s: &str) {
        self.push_str(s)
    }
}

impl Sink for Vec<u8> {
    fn new() -> Self {
        Default::default()
    }
    fn len(&self) -> usize {
        self.len()
    }
    fn push_char(&mut self, c: char) {
        let mut b = [0; 4];
        let result = c.encode_utf8(&mut b);
        self.extend(result.as_bytes())
    }
    fn push_str(&mut self, s: &str) {
        self.extend(s.as_bytes())
    }
}
