use crate::error::{Error, Result};

/// Split `items` into consecutive groups of `size`, the last possibly shorter.
///
/// Order is preserved and nothing is copied. An empty input yields a single
/// empty chunk; a `size` of zero is rejected.
pub fn chunk<T>(items: Vec<T>, size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(Error::InvalidArgument("chunk size must be positive".to_string()));
    }
    let mut chunks = Vec::with_capacity(items.len().div_ceil(size).max(1));
    let mut rest = items.into_iter().peekable();
    loop {
        chunks.push(rest.by_ref().take(size).collect());
        if rest.peek().is_none() {
            break;
        }
    }
    Ok(chunks)
}
