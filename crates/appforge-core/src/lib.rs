//! Appforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Appforge
//! generation core: a prompt template rendering engine and a deterministic
//! project-scaffolding engine over a single app specification.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          appforge-cli (CLI)             │
//! │      (Implements Driving Ports)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (PromptService, BundleService)       │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │  (Driven: Registry, Random, Filesystem) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    appforge-adapters (Infrastructure)   │
//! │ (InMemoryRegistry, ThreadRandom, etc.)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (PromptTemplate, AppSpec, generators)   │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::collections::BTreeMap;
//! use appforge_core::{
//!     application::{BundleService, PromptService},
//!     domain::{AppSpec, TargetLanguage, generators},
//! };
//!
//! // Pure scaffolding needs no adapters at all:
//! let spec = AppSpec::new("My App", "demo", TargetLanguage::TypeScript);
//! let bundle = generators::bundle_all(&spec);
//!
//! // Rendering needs an injected registry and random source:
//! let service = PromptService::new(registry, random);
//! let prompt = service.render("app-brief", "production", &BTreeMap::new())?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BundleService, PromptService,
        ports::{Filesystem, RandomSource, TemplateRegistry},
    };
    pub use crate::domain::{
        AppSpec, EnvOverride, ProjectBundle, PromptTemplate, PromptVersion, RenderedPrompt,
        TargetLanguage, Variant, generators, slugify,
    };
    pub use crate::error::{ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
