//! Marker-delimited framing for stash pages (`ST`) and items (`JM`).

pub const PAGE_MARKER: &[u8; 2] = b"ST";
pub const ITEM_MARKER: &[u8; 2] = b"JM";

/// Split `data` on every non-overlapping occurrence of `marker`.
///
/// The first element holds the bytes before the first marker (possibly
/// empty); every following element is the payload after one marker, up to
/// the next marker or the end of the buffer. Joining the preamble with
/// `marker + payload` for each remaining element reproduces `data`.
pub fn split<'a>(data: &'a [u8], marker: &[u8; 2]) -> Vec<&'a [u8]> {
    let mut out = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;

    while i + 1 < data.len() {
        if data[i] == marker[0] && data[i + 1] == marker[1] {
            out.push(&data[start..i]);
            i += 2;
            start = i;
        } else {
            i += 1;
        }
    }
    out.push(&data[start..]);
    out
}

/// Inverse of [`split`].
pub fn join(parts: &[&[u8]], marker: &[u8; 2]) -> Vec<u8> {
    let mut out = Vec::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.extend_from_slice(marker);
        }
        out.extend_from_slice(part);
    }
    out
}

/// Re-attach socketed children to their parent item.
///
/// Each chunk is consumed from the front; `socket_count_of` peeks the
/// parent's filled-socket count and that many following chunks are
/// appended to it, each prefixed with its `JM` marker so the fused buffer
/// can be split again later. Running out of chunks while a parent still
/// expects children is reported as `Err` with the parent's index.
pub fn fuse_sockets<E, F>(chunks: &[&[u8]], mut socket_count_of: F) -> Result<Vec<Vec<u8>>, FuseError<E>>
where
    F: FnMut(&[u8]) -> Result<usize, E>,
{
    let mut fused = Vec::with_capacity(chunks.len());
    let mut idx = 0usize;

    while idx < chunks.len() {
        let parent = chunks[idx];
        let sockets = socket_count_of(parent).map_err(FuseError::Peek)?;
        if idx + sockets >= chunks.len() && sockets > 0 {
            return Err(FuseError::MissingChildren {
                parent: fused.len(),
                expected: sockets,
                found: chunks.len() - idx - 1,
            });
        }

        let mut raw = parent.to_vec();
        for child in &chunks[idx + 1..idx + 1 + sockets] {
            raw.extend_from_slice(ITEM_MARKER);
            raw.extend_from_slice(child);
        }
        fused.push(raw);
        idx += 1 + sockets;
    }

    Ok(fused)
}

#[derive(Debug)]
pub enum FuseError<E> {
    Peek(E),
    MissingChildren {
        parent: usize,
        expected: usize,
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_without_markers_is_all_preamble() {
        let parts = split(b"hello", ITEM_MARKER);
        assert_eq!(parts, vec![&b"hello"[..]]);
        assert_eq!(split(b"", ITEM_MARKER), vec![&b""[..]]);
    }

    #[test]
    fn split_yields_payloads_after_each_marker() {
        let data = b"xxJMabcJMJMde";
        let parts = split(data, ITEM_MARKER);
        assert_eq!(parts, vec![&b"xx"[..], b"abc", b"", b"de"]);
        assert_eq!(join(&parts, ITEM_MARKER), data.to_vec());
    }

    #[test]
    fn split_does_not_overlap_markers() {
        let parts = split(b"STST", PAGE_MARKER);
        assert_eq!(parts, vec![&b""[..], b"", b""]);
        let parts = split(b"SSTT", PAGE_MARKER);
        assert_eq!(parts, vec![&b"S"[..], b"T"]);
    }

    #[test]
    fn fuse_absorbs_following_chunks_with_markers() {
        let chunks: Vec<&[u8]> = vec![&b"p2"[..], b"c1", b"c2", b"p0", b"p1", b"c3"];
        let fused = fuse_sockets::<(), _>(&chunks, |chunk| {
            Ok(match chunk {
                b"p2" => 2,
                b"p1" => 1,
                _ => 0,
            })
        })
        .unwrap();

        assert_eq!(
            fused,
            vec![b"p2JMc1JMc2".to_vec(), b"p0".to_vec(), b"p1JMc3".to_vec()]
        );

        let resplit = split(&fused[0], ITEM_MARKER);
        assert_eq!(resplit, vec![&b"p2"[..], b"c1", b"c2"]);
    }

    #[test]
    fn fuse_reports_missing_children() {
        let chunks: Vec<&[u8]> = vec![&b"a"[..], b"b"];
        let err = fuse_sockets::<(), _>(&chunks, |chunk| Ok(if chunk == b"b" { 3 } else { 0 }))
            .unwrap_err();
        match err {
            FuseError::MissingChildren {
                parent,
                expected,
                found,
            } => {
                assert_eq!((parent, expected, found), (1, 3, 0));
            }
            FuseError::Peek(_) => panic!("unexpected peek error"),
        }
    }
}
