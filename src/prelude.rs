//! Dining Menu prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{
        Catalog, Category, MenuItem,
        visible::{
            EmptyCategories, VisibleCategory, VisibleMenu, compute_visible_items,
            compute_visible_items_with,
        },
    },
    client::{ClientError, MenuClient},
    filters::{FilterKind, FilterState, classify, names::display_name},
    fixtures::{Fixture, FixtureError},
    page::{PageError, PageParams},
    payload::{FilterIcons, MenuPayload, MenuRequest, Nutrition, RouteIndex},
    render::RenderError,
    session::{FilterButton, MenuSession, SessionError},
    tags::TagSet,
};
