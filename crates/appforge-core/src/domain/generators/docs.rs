//! Documentation generator.
//!
//! Emits a README documenting the conventions the code bundle ships with,
//! a one-line API stub, and an architecture diagram string.

use crate::domain::entities::bundle::DocsBundle;

/// Generate the documentation bundle from the app name and description.
pub fn generate(name: &str, description: &str) -> DocsBundle {
    let readme = format!(
        r#"# {name}

{description}

## Conventions

The generated code ships with four cross-cutting utilities, wired into
`src/App`:

- **Feature flags** (`src/lib/featureFlags`): gate UI sections with
  `isEnabled("flag")`; override per environment with `FLAG_<NAME>` variables.
- **Analytics** (`src/lib/analytics`): `track(event, props)` appends to an
  in-memory queue; drain it with `flush()` from your uploader.
- **Internationalization** (`src/lib/i18n`): `t(key, fallback)` resolves
  against per-locale message tables; add locales to `messages`.
- **Accessibility** (`src/lib/accessibility`): `auditPage(root)` reports
  findings for missing alt text and unlabeled buttons.

## Backend

`server/index` exposes `GET /health` for liveness probes.
"#
    );

    let api_docs = "GET /health — returns { \"status\": \"ok\" } while the service is live.\n".to_string();

    let architecture = ARCHITECTURE.to_string();

    DocsBundle {
        readme,
        api_docs,
        architecture,
    }
}

const ARCHITECTURE: &str = r#"+-----------+      +------------+      +------------+
|  React UI | ---> |  API shim  | ---> |  Postgres  |
+-----------+      +------------+      +------------+
      |
      v
+-----------------+
| analytics queue |
+-----------------+
"#;
