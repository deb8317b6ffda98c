//! Retrieval operations: [`first`], [`read_all`] and [`paginate`].
//!
//! Each operation takes ownership of the iterator and closes it before
//! returning, on success and on every error path.

use crate::config::PaginationConfig;
use crate::error::{CoreError, CoreResult};
use crate::iterator::{IteratorGuard, RowIterator};
use crate::materialize::SliceBuilder;
use crate::page::{PageRequest, PageResponse};
use crate::row_id::RowId;
use rowpage_codec::Decode;
use tracing::{debug, trace};

/// Loads the first record into `dest` and closes the iterator.
///
/// Any error from the iterator is returned unchanged, including
/// [`CoreError::IteratorDone`] for an empty result. Records after the first
/// are not inspected.
///
/// # Errors
///
/// Returns the error reported by `load_next` or `close`.
pub fn first<I: RowIterator>(it: I, dest: &mut dyn Decode) -> CoreResult<RowId> {
    let mut guard = IteratorGuard::new(it);
    let result = guard.load_next(dest);
    guard.finish(result)
}

/// Loads every record into `dest` and returns their row IDs in order.
///
/// `dest` is replaced only once the iterator is exhausted and closed; an
/// empty iterator leaves it empty and returns no row IDs. On any error,
/// including a failed close, `dest` is left as it was.
///
/// ```
/// use rowpage_core::{read_all, BufferedIterator, RowId};
///
/// let it = BufferedIterator::new(vec![
///     (RowId::from_u64(1), "alpha".into()),
///     (RowId::from_u64(2), "beta".into()),
/// ]);
/// let mut loaded: Vec<String> = Vec::new();
/// let row_ids = read_all(it, &mut loaded).unwrap();
///
/// assert_eq!(loaded, vec!["alpha", "beta"]);
/// assert_eq!(row_ids, vec![RowId::from_u64(1), RowId::from_u64(2)]);
/// ```
///
/// # Errors
///
/// Returns the first error other than [`CoreError::IteratorDone`].
pub fn read_all<I, T>(it: I, dest: &mut Vec<T>) -> CoreResult<Vec<RowId>>
where
    I: RowIterator,
    T: Decode + Default,
{
    let mut guard = IteratorGuard::new(it);
    let result = drain(&mut guard);
    let (records, row_ids) = guard.finish(result)?;
    records.commit(dest);
    Ok(row_ids)
}

fn drain<I, T>(guard: &mut IteratorGuard<I>) -> CoreResult<(SliceBuilder<T>, Vec<RowId>)>
where
    I: RowIterator,
    T: Decode + Default,
{
    let mut records = SliceBuilder::new();
    let mut row_ids = Vec::new();
    loop {
        let mut record = T::default();
        match guard.load_next(&mut record) {
            Ok(row_id) => {
                records.push(record);
                row_ids.push(row_id);
            }
            Err(CoreError::IteratorDone) => return Ok((records, row_ids)),
            Err(err) => return Err(err),
        }
    }
}

/// Loads one page of records into `dest` using the default configuration.
///
/// See [`paginate_with`].
///
/// # Errors
///
/// See [`paginate_with`].
pub fn paginate<I, T>(
    it: I,
    page_request: Option<&PageRequest>,
    dest: &mut Vec<T>,
) -> CoreResult<PageResponse>
where
    I: RowIterator,
    T: Decode + Default,
{
    paginate_with(&PaginationConfig::default(), it, page_request, dest)
}

/// Loads one page of records into `dest`.
///
/// A missing request behaves like [`PageRequest::default`]. A zero limit is
/// replaced by `config.default_limit` and turns on total counting.
///
/// With an offset, the first `offset` records are skipped. With a key, the
/// iterator is expected to start at that key already. After the page is
/// filled, one more record is read to obtain `next_key`. If a total was
/// requested and no key was given, the rest of the iterator is then counted
/// without being decoded into `dest`; cursor requests never report a total.
///
/// `dest` is written only when the call succeeds, after the iterator has
/// been closed.
///
/// # Errors
///
/// - [`CoreError::InvalidRequest`] if both `offset` and `key` are set; the
///   iterator is closed without being read
/// - [`CoreError::Argument`] if `config` is invalid
/// - any error from the iterator other than [`CoreError::IteratorDone`]
pub fn paginate_with<I, T>(
    config: &PaginationConfig,
    it: I,
    page_request: Option<&PageRequest>,
    dest: &mut Vec<T>,
) -> CoreResult<PageResponse>
where
    I: RowIterator,
    T: Decode + Default,
{
    let mut guard = IteratorGuard::new(it);
    let result = PageWindow::resolve(config, page_request)
        .and_then(|window| scan_page(&mut guard, &window));
    let (page, response) = guard.finish(result)?;
    page.commit(dest);
    Ok(response)
}

/// A page request after defaults have been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PageWindow {
    offset: u64,
    limit: u64,
    /// Position of the last record on the page.
    end: u64,
    count_total: bool,
    cursor: bool,
}

impl PageWindow {
    fn resolve(config: &PaginationConfig, page_request: Option<&PageRequest>) -> CoreResult<Self> {
        let default_request = PageRequest::default();
        let request = page_request.unwrap_or(&default_request);

        if request.offset > 0 && request.key.is_some() {
            return Err(CoreError::invalid_request(
                "invalid request, either offset or key is expected, got both",
            ));
        }
        config.validate()?;

        let (limit, count_total) = if request.limit == 0 {
            debug!(limit = config.default_limit, "page limit not set, using default");
            (config.default_limit, true)
        } else {
            (request.limit, request.count_total)
        };

        Ok(Self {
            offset: request.offset,
            limit,
            end: request.offset.saturating_add(limit),
            count_total,
            cursor: request.key.is_some(),
        })
    }

    /// Totals are only computed for offset-driven requests.
    fn reports_total(&self) -> bool {
        self.count_total && !self.cursor
    }
}

fn scan_page<I, T>(
    guard: &mut IteratorGuard<I>,
    window: &PageWindow,
) -> CoreResult<(SliceBuilder<T>, PageResponse)>
where
    I: RowIterator,
    T: Decode + Default,
{
    let mut page = SliceBuilder::for_limit(window.limit);
    let mut next_key = None;
    let mut count: u64 = 0;

    loop {
        let mut record = T::default();
        let row_id = match guard.load_next(&mut record) {
            Ok(row_id) => row_id,
            Err(CoreError::IteratorDone) => break,
            Err(err) => return Err(err),
        };
        count += 1;

        if count <= window.offset {
            continue;
        }
        if count <= window.end {
            page.push(record);
        } else if count - 1 == window.end {
            // The page is complete; anything further is only counted.
            next_key = Some(row_id);
            if !window.reports_total() {
                break;
            }
        }
    }

    let total = window.reports_total().then_some(count);
    trace!(count, has_next = next_key.is_some(), "page scanned");
    Ok((page, PageResponse { next_key, total }))
}
