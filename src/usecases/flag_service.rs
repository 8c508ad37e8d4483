//! "My flags": build a selection, share it as a link, open shared links.

use crate::domain::share::{self, ShareMessage};
use crate::domain::share_token;
use crate::domain::{DomainError, Flag, FlagKind, FlagSelection};
use crate::usecases::CatalogService;
use std::sync::Arc;
use tracing::{debug, warn};

/// Flags resolved from a selection, in catalog order.
#[derive(Debug, Clone)]
pub struct SharedFlags {
    pub token: String,
    pub red: Vec<Flag>,
    pub green: Vec<Flag>,
}

impl SharedFlags {
    pub fn is_empty(&self) -> bool {
        self.red.is_empty() && self.green.is_empty()
    }
}

pub struct FlagService {
    catalog: Arc<CatalogService>,
    site_url: String,
}

impl FlagService {
    pub fn new(catalog: Arc<CatalogService>, site_url: impl Into<String>) -> Self {
        Self {
            catalog,
            site_url: site_url.into(),
        }
    }

    pub fn share_token(&self, selection: &FlagSelection) -> String {
        share_token::encode(&selection.red, &selection.green)
    }

    /// Catalog flags that `selection` refers to. Unknown numbers are skipped.
    pub fn resolve(&self, selection: &FlagSelection) -> (Vec<Flag>, Vec<Flag>) {
        (
            self.resolve_kind(FlagKind::Red, selection),
            self.resolve_kind(FlagKind::Green, selection),
        )
    }

    fn resolve_kind(&self, kind: FlagKind, selection: &FlagSelection) -> Vec<Flag> {
        let ids = selection.ids(kind);
        let flags: Vec<Flag> = self
            .catalog
            .flags(kind)
            .iter()
            .filter(|f| f.share_number(kind).is_some_and(|n| ids.contains(&n)))
            .cloned()
            .collect();
        if flags.len() < ids.len() {
            let dropped: Vec<u32> = ids
                .iter()
                .copied()
                .filter(|n| self.catalog.find_flag(kind, *n).is_none())
                .collect();
            warn!(catalog = %kind, ?dropped, "dropping unknown flag ids");
        }
        flags
    }

    /// Flag card + link for the current selection.
    pub fn share(&self, selection: &FlagSelection) -> ShareMessage {
        let token = self.share_token(selection);
        let (red, green) = self.resolve(selection);
        share::flag_card(&self.site_url, &token, &red, &green)
    }

    /// Open a shared token or full share link.
    ///
    /// `InvalidToken` when it cannot be decoded, `ExpiredLink` when it
    /// decodes but none of its flags exist any more.
    pub fn open_shared(&self, link: &str) -> Result<SharedFlags, DomainError> {
        let token = share::token_from_link(link);
        let selection = share_token::decode(token)?;
        let (red, green) = self.resolve(&selection);
        debug!(
            token,
            requested = selection.len(),
            resolved = red.len() + green.len(),
            "shared link opened"
        );
        let shared = SharedFlags {
            token: token.to_string(),
            red,
            green,
        };
        if shared.is_empty() {
            return Err(DomainError::ExpiredLink);
        }
        Ok(shared)
    }

    /// Share payload for a card opened from a link (re-shares the same token).
    pub fn reshare(&self, shared: &SharedFlags) -> ShareMessage {
        share::flag_card(&self.site_url, &shared.token, &shared.red, &shared.green)
    }
}
