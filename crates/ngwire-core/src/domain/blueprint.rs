//! Source blueprints for each feature kind.
//!
//! A blueprint is a list of `(path, content)` templates. Both halves may use
//! the `{{SELECTOR}}`, `{{CLASSNAME}}` and `{{PIPENAME}}` placeholders of
//! [`RenderContext::for_artifact`]. Generated sources use `\r\n` line
//! endings.

use std::path::Path;

use tracing::instrument;

use crate::domain::{
    entities::{ArtifactRequest, GeneratedArtifact, ProjectStructure, RenderContext},
    error::DomainError,
    value_objects::FeatureKind,
};

/// One templated file of a blueprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlueprintFile {
    pub path: &'static str,
    pub content: &'static str,
    /// The file exporting the artifact's class.
    pub primary: bool,
}

/// The files generated for one feature kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blueprint {
    pub kind: FeatureKind,
    pub files: &'static [BlueprintFile],
}

/// A rendered blueprint: what to write, and what to register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub structure: ProjectStructure,
    pub artifact: GeneratedArtifact,
}

const COMPONENT_FILES: &[BlueprintFile] = &[
    BlueprintFile {
        path: "{{SELECTOR}}/index.ts",
        content: "export * from './{{SELECTOR}}.component';",
        primary: false,
    },
    BlueprintFile {
        path: "{{SELECTOR}}/{{SELECTOR}}.component.ts",
        content: "import { Component, OnInit } from '@angular/core';\r\n\
                  \r\n\
                  @Component({\r\n\
                  \tmoduleId: module.id,\r\n\
                  \tselector: 'app-{{SELECTOR}}',\r\n\
                  \ttemplateUrl: '{{SELECTOR}}.component.html',\r\n\
                  \tstyleUrls: [ '{{SELECTOR}}.component.css' ]\r\n\
                  })\r\n\
                  export class {{CLASSNAME}}Component implements OnInit {\r\n\
                  \r\n\
                  \tconstructor() { }\r\n\
                  \r\n\
                  \tngOnInit() { }\r\n\
                  \r\n\
                  }",
        primary: true,
    },
    BlueprintFile {
        path: "{{SELECTOR}}/{{SELECTOR}}.component.html",
        content: "<p>\r\n\t{{SELECTOR}} works!\r\n</p>",
        primary: false,
    },
    BlueprintFile {
        path: "{{SELECTOR}}/{{SELECTOR}}.component.css",
        content: "/* {{SELECTOR}} stylesheet */",
        primary: false,
    },
];

const DIRECTIVE_FILES: &[BlueprintFile] = &[BlueprintFile {
    path: "{{SELECTOR}}.directive.ts",
    content: "import { Directive } from '@angular/core';\r\n\
              \r\n\
              @Directive({\r\n\
              \tselector: '[{{SELECTOR}}]'\r\n\
              })\r\n\
              export class {{CLASSNAME}}Directive {\r\n\
              \r\n\
              \tconstructor() { }\r\n\
              \r\n\
              }",
    primary: true,
}];

const SERVICE_FILES: &[BlueprintFile] = &[BlueprintFile {
    path: "{{SELECTOR}}.service.ts",
    content: "import { Injectable } from '@angular/core';\r\n\
              \r\n\
              @Injectable()\r\n\
              export class {{CLASSNAME}}Service {\r\n\
              \r\n\
              \tconstructor() { }\r\n\
              \r\n\
              }",
    primary: true,
}];

const PIPE_FILES: &[BlueprintFile] = &[BlueprintFile {
    path: "{{SELECTOR}}.pipe.ts",
    content: "import { Pipe, PipeTransform } from '@angular/core';\r\n\
              \r\n\
              @Pipe({\r\n\
              \tname: '{{PIPENAME}}'\r\n\
              })\r\n\
              export class {{CLASSNAME}}Pipe implements PipeTransform {\r\n\
              \r\n\
              \ttransform(value: any, args?: any): any {\r\n\
              \t\treturn null;\r\n\
              \t}\r\n\
              \r\n\
              }",
    primary: true,
}];

impl Blueprint {
    pub const fn for_kind(kind: FeatureKind) -> Self {
        let files = match kind {
            FeatureKind::Component => COMPONENT_FILES,
            FeatureKind::Directive => DIRECTIVE_FILES,
            FeatureKind::Service => SERVICE_FILES,
            FeatureKind::Pipe => PIPE_FILES,
        };
        Self { kind, files }
    }

    /// Render every file under `cwd` and describe the resulting artifact.
    #[instrument(skip_all, fields(kind = %request.kind, name = %request.name.selector()))]
    pub fn render(
        &self,
        request: &ArtifactRequest,
        cwd: &Path,
    ) -> Result<RenderedArtifact, DomainError> {
        let ctx = RenderContext::for_artifact(&request.name);
        let mut structure = ProjectStructure::new(cwd);

        if self.kind.has_own_directory() {
            structure.add_directory(request.name.selector());
        }

        let mut primary = None;
        for file in self.files {
            let path = ctx.render(file.path);
            if file.primary {
                primary = Some(cwd.join(&path));
            }
            structure.add_file(path, ctx.render(file.content));
        }

        structure.validate()?;

        let primary = primary.ok_or(DomainError::EmptyStructure)?;
        Ok(RenderedArtifact {
            artifact: GeneratedArtifact::new(request, primary),
            structure,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::naming::ArtifactName;

    fn render(kind: FeatureKind, name: &str) -> RenderedArtifact {
        let request = ArtifactRequest::new(kind, ArtifactName::parse(name).unwrap());
        Blueprint::for_kind(kind)
            .render(&request, Path::new("/proj/src/app"))
            .unwrap()
    }

    #[test]
    fn every_kind_has_exactly_one_primary_file() {
        for kind in FeatureKind::ALL {
            let primaries = Blueprint::for_kind(kind)
                .files
                .iter()
                .filter(|f| f.primary)
                .count();
            assert_eq!(primaries, 1, "{kind}");
        }
    }

    #[test]
    fn component_lives_in_its_own_directory() {
        let rendered = render(FeatureKind::Component, "foo");

        assert_eq!(
            rendered.artifact.file_path,
            PathBuf::from("/proj/src/app/foo/foo.component.ts")
        );
        assert_eq!(rendered.structure.directories().count(), 1);
        assert_eq!(rendered.structure.files().count(), 4);

        let ts = rendered
            .structure
            .files()
            .find(|f| f.path == Path::new("foo/foo.component.ts"))
            .unwrap();
        assert!(ts.text().unwrap().contains("selector: 'app-foo'"));
        assert!(ts.text().unwrap().contains("export class FooComponent implements OnInit"));
        assert!(ts.text().unwrap().contains("\r\n"));
    }

    #[test]
    fn service_is_a_single_file_in_cwd() {
        let rendered = render(FeatureKind::Service, "user-data");

        assert_eq!(
            rendered.artifact.file_path,
            PathBuf::from("/proj/src/app/user-data.service.ts")
        );
        assert_eq!(rendered.structure.entry_count(), 1);
        let file = rendered.structure.files().next().unwrap();
        assert!(file.text().unwrap().contains("export class UserDataService"));
    }

    #[test]
    fn pipe_uses_camel_case_name() {
        let rendered = render(FeatureKind::Pipe, "to-upper");
        let file = rendered.structure.files().next().unwrap();
        assert!(file.text().unwrap().contains("name: 'toUpper'"));
        assert!(file.text().unwrap().contains("export class ToUpperPipe"));
    }

    #[test]
    fn directive_uses_attribute_selector() {
        let rendered = render(FeatureKind::Directive, "highlight");
        let file = rendered.structure.files().next().unwrap();
        assert!(file.text().unwrap().contains("selector: '[highlight]'"));
        assert!(!file.text().unwrap().contains("{{"));
    }
}
