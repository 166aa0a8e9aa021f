// web_app/mod.rs - Root module for the Leptos storefront
//
// Architecture:
// - model/: Shared data types (used by both client and server)
// - layout.rs: Which components each page is made of (plain data)
// - media.rs: Media URL resolution
// - server_fns.rs: Server function declarations (both client and server)
// - api/: Database queries and server-side logic (SSR only)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Route-level page components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod layout;
pub mod media;
pub mod model;

// Server function declarations - must be available to both client and server
// The #[server] macro generates client stubs that call the server via HTTP
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

// API module for database queries and server-side logic (SSR only)
#[cfg(feature = "ssr")]
pub mod api;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
