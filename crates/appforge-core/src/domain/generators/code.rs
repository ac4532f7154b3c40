//! Application code generator.
//!
//! Emits a fixed, deterministic file set: an entry point wired to the four
//! cross-cutting utilities (feature flags, i18n, analytics, accessibility),
//! two presentational components, a minimal backend with a health endpoint,
//! and a smoke test stub. All text is literal interpolation of the AppSpec —
//! no variant sampling happens here. A shipped scaffold must reproduce
//! byte-identically for identical input, unlike a rendered prompt, which may
//! legitimately vary run to run.

use crate::domain::entities::app_spec::AppSpec;
use crate::domain::entities::bundle::{CodeBundle, GeneratedFile};
use crate::domain::slug::slugify;

/// Generate the code bundle for an app spec.
pub fn generate(spec: &AppSpec) -> CodeBundle {
    // Computed once; package.json and the analytics app tag must agree.
    let slug = slugify(&spec.name);
    let ext = spec.language.component_ext();
    let mx = spec.language.module_ext();

    let files = vec![
        GeneratedFile::new("package.json", package_json(&slug, &spec.description)),
        GeneratedFile::new(format!("src/App.{ext}"), app_entry(spec, &slug)),
        GeneratedFile::new(format!("src/lib/featureFlags.{mx}"), FEATURE_FLAGS),
        GeneratedFile::new(format!("src/lib/i18n.{mx}"), i18n(spec)),
        GeneratedFile::new(format!("src/lib/analytics.{mx}"), ANALYTICS),
        GeneratedFile::new(format!("src/lib/accessibility.{mx}"), ACCESSIBILITY),
        GeneratedFile::new(
            format!("src/components/OnboardingStepper.{ext}"),
            ONBOARDING_STEPPER,
        ),
        GeneratedFile::new(format!("src/components/PricingGrid.{ext}"), PRICING_GRID),
        GeneratedFile::new(format!("server/index.{mx}"), server(&slug)),
    ];

    let tests = vec![GeneratedFile::new(
        format!("src/App.test.{ext}"),
        SMOKE_TEST,
    )];

    CodeBundle {
        name: slug,
        files,
        tests,
    }
}

fn package_json(slug: &str, description: &str) -> String {
    format!(
        r#"{{
  "name": "{slug}",
  "version": "0.1.0",
  "private": true,
  "description": "{description}",
  "scripts": {{
    "dev": "vite",
    "build": "vite build",
    "test": "vitest run"
  }}
}}
"#
    )
}

fn app_entry(spec: &AppSpec, slug: &str) -> String {
    format!(
        r#"import {{ OnboardingStepper }} from "./components/OnboardingStepper";
import {{ PricingGrid }} from "./components/PricingGrid";
import {{ isEnabled }} from "./lib/featureFlags";
import {{ t }} from "./lib/i18n";
import {{ track }} from "./lib/analytics";
import {{ auditPage }} from "./lib/accessibility";

// {name} — {description} ({language})
export default function App() {{
  track("app_opened", {{ app: "{slug}" }});
  if (typeof document !== "undefined") {{
    auditPage(document.body);
  }}
  return (
    <main>
      <h1>{{t("app.title", "{name}")}}</h1>
      <p>{{t("app.tagline", "{description}")}}</p>
      {{isEnabled("onboarding") && <OnboardingStepper />}}
      {{isEnabled("pricing") && <PricingGrid />}}
    </main>
  );
}}
"#,
        name = spec.name,
        description = spec.description,
        language = spec.language,
    )
}

fn i18n(spec: &AppSpec) -> String {
    format!(
        r#"const messages = {{
  en: {{
    "app.title": "{name}",
    "app.tagline": "{description}",
  }},
}};

let locale = "en";

export function setLocale(next) {{
  if (messages[next]) locale = next;
}}

export function t(key, fallback) {{
  const table = messages[locale] || {{}};
  return table[key] !== undefined ? table[key] : fallback !== undefined ? fallback : key;
}}
"#,
        name = spec.name,
        description = spec.description,
    )
}

fn server(slug: &str) -> String {
    format!(
        r#"import {{ createServer }} from "node:http";

const server = createServer((req, res) => {{
  if (req.url === "/health") {{
    res.writeHead(200, {{ "content-type": "application/json" }});
    res.end(JSON.stringify({{ status: "ok", app: "{slug}" }}));
    return;
  }}
  res.writeHead(404);
  res.end();
}});

server.listen(process.env.PORT || 3000);
"#
    )
}

const FEATURE_FLAGS: &str = r#"const defaults = { onboarding: true, pricing: true };

export function isEnabled(flag) {
  const env =
    typeof process !== "undefined"
      ? process.env["FLAG_" + flag.toUpperCase()]
      : undefined;
  if (env !== undefined) return env === "true";
  return Boolean(defaults[flag]);
}
"#;

const ANALYTICS: &str = r#"const queue = [];

export function track(event, props) {
  queue.push({ event, props: props || {}, at: Date.now() });
}

export function flush() {
  return queue.splice(0, queue.length);
}

export function pending() {
  return queue.length;
}
"#;

const ACCESSIBILITY: &str = r#"export function auditPage(root) {
  const findings = [];
  for (const img of root.querySelectorAll("img:not([alt])")) {
    findings.push({ rule: "img-alt", node: img.tagName });
  }
  for (const button of root.querySelectorAll("button:empty")) {
    findings.push({ rule: "button-label", node: button.tagName });
  }
  return findings;
}
"#;

const ONBOARDING_STEPPER: &str = r#"import { track } from "../lib/analytics";

const steps = ["Welcome", "Profile", "Finish"];

export function OnboardingStepper() {
  return (
    <ol aria-label="Onboarding steps">
      {steps.map((step, index) => (
        <li key={step} onClick={() => track("onboarding_step", { index })}>
          {step}
        </li>
      ))}
    </ol>
  );
}
"#;

const PRICING_GRID: &str = r#"const plans = [
  { name: "Starter", price: "$0" },
  { name: "Pro", price: "$19" },
  { name: "Scale", price: "$99" },
];

export function PricingGrid() {
  return (
    <section aria-label="Pricing plans">
      {plans.map((plan) => (
        <article key={plan.name}>
          <h2>{plan.name}</h2>
          <p>{plan.price}</p>
        </article>
      ))}
    </section>
  );
}
"#;

const SMOKE_TEST: &str = r#"import { test, expect } from "vitest";
import App from "./App";

test("app module exposes a component", () => {
  expect(typeof App).toBe("function");
});
"#;
