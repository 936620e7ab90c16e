//! Aliases table.
//!
//! [`AliasesView`] is a pure state machine for the aliases list page. It
//! keeps the query in sync with the location's query string, fetches through
//! a debounce, groups `cat.aliases` rows by alias and pages them locally.

use std::{ops::Sub, time::Duration};

use imconsole_core::{
    ApiRequest, CallResult, Endpoint,
    aliases::{AliasGroup, AliasRow, group_by_alias},
};
use serde_json::{Value, json};
use url::form_urlencoded;

use crate::Debouncer;

/// Sort direction of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    #[default]
    Desc,
}

impl SortDirection {
    /// Wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Parse a wire name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Paging, search and sort of the aliases table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasQuery {
    /// Zero-based page number.
    pub from: usize,
    /// Rows per page.
    pub size: usize,
    /// Alias name prefix.
    pub search: String,
    /// Column to sort by.
    pub sort_field: String,
    /// Sort direction.
    pub sort_direction: SortDirection,
}

impl Default for AliasQuery {
    fn default() -> Self {
        Self {
            from: 0,
            size: 20,
            search: String::new(),
            sort_field: "alias".to_owned(),
            sort_direction: SortDirection::Desc,
        }
    }
}

impl AliasQuery {
    /// Encode as a location query string, keys in sorted order.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("from", &self.from.to_string())
            .append_pair("search", &self.search)
            .append_pair("size", &self.size.to_string())
            .append_pair("sortDirection", self.sort_direction.as_str())
            .append_pair("sortField", &self.sort_field)
            .finish()
    }

    /// Decode a location query string. Missing or unparsable keys keep their
    /// defaults; unknown keys are ignored.
    pub fn from_query_string(query: &str) -> Self {
        let mut parsed = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "from" => {
                    if let Ok(from) = value.parse() {
                        parsed.from = from;
                    }
                },
                "size" => {
                    if let Ok(size) = value.parse::<usize>()
                        && size > 0
                    {
                        parsed.size = size;
                    }
                },
                "search" => parsed.search = value.into_owned(),
                "sortField" if !value.is_empty() => parsed.sort_field = value.into_owned(),
                "sortDirection" => {
                    if let Some(direction) = SortDirection::parse(&value) {
                        parsed.sort_direction = direction;
                    }
                },
                _ => {},
            }
        }
        parsed
    }

    /// `cat.aliases` request for this query.
    pub fn request(&self) -> ApiRequest {
        ApiRequest::new(Endpoint::CAT_ALIASES).with_data(json!({
            "format": "json",
            "name": format!("{}*", self.search),
            "s": format!("{}:{}", self.sort_field, self.sort_direction.as_str()),
        }))
    }

    fn page_range(&self, total: usize) -> std::ops::Range<usize> {
        let start = self.from.saturating_mul(self.size).min(total);
        let end = self.from.saturating_add(1).saturating_mul(self.size).min(total);
        start..end
    }
}

/// Events processed by the aliases view.
#[derive(Debug, Clone, PartialEq)]
pub enum AliasesEvent<I> {
    /// The page was opened.
    Mount {
        /// Current time.
        now: I,
    },

    /// Paging or sorting changed.
    TableChange {
        /// New page number.
        from: usize,
        /// New page size.
        size: usize,
        /// New sort column and direction. `None` keeps the current sort.
        sort: Option<(String, SortDirection)>,
        /// Current time.
        now: I,
    },

    /// Search text changed.
    SearchChange {
        /// New search text.
        text: String,
        /// Current time.
        now: I,
    },

    /// Row selection changed.
    SelectionChange {
        /// Selected alias names.
        aliases: Vec<String>,
    },

    /// Something changed the aliases (a delete, a create); fetch again.
    Refresh {
        /// Current time.
        now: I,
    },

    /// Time advanced.
    Tick {
        /// Current time.
        now: I,
    },

    /// A fetch finished.
    Loaded {
        /// Tag of the fetch, as issued in [`AliasesAction::Fetch`].
        seq: u64,
        /// Envelope returned by the backend.
        result: CallResult<Value>,
    },
}

/// Actions produced by the aliases view.
#[derive(Debug, Clone, PartialEq)]
pub enum AliasesAction {
    /// Re-render the table.
    Render,

    /// Replace the location's query string.
    SyncQuery(String),

    /// Issue a fetch. Its result comes back as [`AliasesEvent::Loaded`]
    /// with the same `seq`.
    Fetch {
        /// Tag of this fetch.
        seq: u64,
        /// Request to send.
        request: ApiRequest,
    },

    /// Post a danger toast.
    NotifyDanger(String),
}

/// Aliases table state machine.
#[derive(Debug, Clone)]
pub struct AliasesView<I> {
    query: AliasQuery,
    /// Current page.
    rows: Vec<AliasGroup>,
    /// Aliases matching the search, across all pages.
    total: usize,
    /// Selected alias names.
    selection: Vec<String>,
    loading: bool,
    /// Tag of the most recent fetch. Results of older fetches are stale.
    latest: u64,
    debouncer: Debouncer<I>,
}

impl<I> AliasesView<I>
where
    I: Copy + Sub<I, Output = Duration>,
{
    /// View starting from `query`, usually parsed from the location.
    pub fn new(query: AliasQuery) -> Self {
        Self {
            query,
            rows: Vec::new(),
            total: 0,
            selection: Vec::new(),
            loading: false,
            latest: 0,
            debouncer: Debouncer::new(Debouncer::<I>::LIST_WAIT),
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AliasesEvent<I>) -> Vec<AliasesAction> {
        match event {
            AliasesEvent::Mount { now } | AliasesEvent::Refresh { now } => self.request_fetch(now),
            AliasesEvent::TableChange { from, size, sort, now } => {
                self.query.from = from;
                if size > 0 {
                    self.query.size = size;
                }
                if let Some((field, direction)) = sort {
                    self.query.sort_field = field;
                    self.query.sort_direction = direction;
                }
                self.request_fetch(now)
            },
            AliasesEvent::SearchChange { text, now } => {
                self.query.from = 0;
                self.query.search = text;
                self.request_fetch(now)
            },
            AliasesEvent::SelectionChange { aliases } => {
                self.selection = aliases;
                vec![AliasesAction::Render]
            },
            AliasesEvent::Tick { now } => {
                if self.debouncer.tick(now) {
                    self.fetch()
                } else {
                    vec![]
                }
            },
            AliasesEvent::Loaded { seq, result } => self.loaded(seq, result),
        }
    }

    fn request_fetch(&mut self, now: I) -> Vec<AliasesAction> {
        if self.debouncer.call(now) {
            self.fetch()
        } else {
            vec![AliasesAction::Render]
        }
    }

    fn fetch(&mut self) -> Vec<AliasesAction> {
        self.loading = true;
        self.latest += 1;
        tracing::debug!(
            seq = self.latest,
            search = %self.query.search,
            from = self.query.from,
            "fetching aliases"
        );
        vec![
            AliasesAction::SyncQuery(self.query.to_query_string()),
            AliasesAction::Fetch { seq: self.latest, request: self.query.request() },
            AliasesAction::Render,
        ]
    }

    fn loaded(&mut self, seq: u64, result: CallResult<Value>) -> Vec<AliasesAction> {
        if seq != self.latest {
            tracing::debug!(seq, latest = self.latest, "stale aliases result dropped");
            return vec![];
        }

        self.loading = false;
        match result.decode::<Vec<AliasRow>>() {
            CallResult::Ok(rows) => {
                let groups = group_by_alias(rows);
                self.total = groups.len();
                self.selection.retain(|alias| groups.iter().any(|g| &g.alias == alias));
                let page = self.query.page_range(groups.len());
                self.rows = groups.into_iter().skip(page.start).take(page.len()).collect();
                vec![AliasesAction::Render]
            },
            CallResult::Err(error) => vec![AliasesAction::NotifyDanger(error), AliasesAction::Render],
        }
    }

    /// Current query.
    pub fn query(&self) -> &AliasQuery {
        &self.query
    }

    /// Rows on the current page.
    pub fn rows(&self) -> &[AliasGroup] {
        &self.rows
    }

    /// Aliases matching the search, across all pages.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Selected alias names.
    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    /// Whether a fetch is in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Whether a trailing refetch is pending.
    pub fn refetch_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}
