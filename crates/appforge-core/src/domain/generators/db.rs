//! Database generator.
//!
//! Emits one schema string (a single entity model, with the app description
//! embedded as a leading comment) and one migration stub. Structurally fixed
//! apart from the interpolated text.

use crate::domain::entities::bundle::{DbBundle, GeneratedFile};

/// Generate the database bundle from the app description.
pub fn generate(description: &str) -> DbBundle {
    let schema = format!(
        r#"// {description}

generator client {{
  provider = "prisma-client-js"
}}

datasource db {{
  provider = "postgresql"
  url      = env("DATABASE_URL")
}}

model AppRecord {{
  id        String   @id @default(cuid())
  title     String
  payload   Json?
  createdAt DateTime @default(now())
  updatedAt DateTime @updatedAt
}}
"#
    );

    let migrations = vec![GeneratedFile::new("migrations/0001_init.sql", MIGRATION_INIT)];

    DbBundle { schema, migrations }
}

const MIGRATION_INIT: &str = r#"-- initial schema
CREATE TABLE "AppRecord" (
    "id" TEXT NOT NULL PRIMARY KEY,
    "title" TEXT NOT NULL,
    "payload" JSONB,
    "createdAt" TIMESTAMP(3) NOT NULL DEFAULT CURRENT_TIMESTAMP,
    "updatedAt" TIMESTAMP(3) NOT NULL
);
"#;
