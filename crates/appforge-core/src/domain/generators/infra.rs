//! Infrastructure generator.
//!
//! Emits a Dockerfile, a CI workflow, and four Terraform files. The storage
//! resource in `main.tf` is named after the slugified app name, which keeps
//! bucket naming consistent with the code bundle's package name.

use crate::domain::entities::bundle::{GeneratedFile, InfraBundle};
use crate::domain::slug::slugify;

/// Generate the infrastructure bundle from the app name.
pub fn generate(name: &str) -> InfraBundle {
    let slug = slugify(name);

    let dockerfiles = vec![GeneratedFile::new("Dockerfile", DOCKERFILE)];

    let ci = vec![GeneratedFile::new(".github/workflows/ci.yml", CI_WORKFLOW)];

    let terraform = vec![
        GeneratedFile::new("terraform/provider.tf", TF_PROVIDER),
        GeneratedFile::new("terraform/variables.tf", TF_VARIABLES),
        GeneratedFile::new("terraform/main.tf", tf_main(&slug)),
        GeneratedFile::new("terraform/outputs.tf", TF_OUTPUTS),
    ];

    InfraBundle {
        dockerfiles,
        ci,
        terraform,
    }
}

fn tf_main(slug: &str) -> String {
    format!(
        r#"resource "aws_s3_bucket" "artifacts" {{
  bucket = "{slug}-artifacts"

  tags = {{
    App = "{slug}"
  }}
}}
"#
    )
}

const DOCKERFILE: &str = r#"FROM node:20-alpine AS build
WORKDIR /app
COPY package.json ./
RUN npm install
COPY . .
RUN npm run build

FROM node:20-alpine
WORKDIR /app
COPY --from=build /app ./
EXPOSE 3000
CMD ["node", "server/index.js"]
"#;

const CI_WORKFLOW: &str = r#"name: ci

on:
  push:
    branches: [main]
  pull_request:

jobs:
  test:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - uses: actions/setup-node@v4
        with:
          node-version: 20
      - run: npm install
      - run: npm test
"#;

const TF_PROVIDER: &str = r#"terraform {
  required_version = ">= 1.5"

  required_providers {
    aws = {
      source  = "hashicorp/aws"
      version = "~> 5.0"
    }
  }
}

provider "aws" {
  region = var.region
}
"#;

const TF_VARIABLES: &str = r#"variable "region" {
  description = "Deployment region"
  type        = string
  default     = "us-east-1"
}
"#;

const TF_OUTPUTS: &str = r#"output "artifact_bucket" {
  description = "Bucket holding build artifacts"
  value       = aws_s3_bucket.artifacts.bucket
}
"#;
