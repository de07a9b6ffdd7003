//! Integration tests for ngwire-core's public registration API.

use std::path::Path;

use ngwire_core::domain::{
    ArtifactName, ArtifactRequest, Blueprint, DomainError, FeatureKind, ListLabel, ModuleFile,
    registration::{import_injector, list_mutator, relative_import_path},
};

const QUICKSTART_MODULE: &str = "import { NgModule }      from '@angular/core';\r\n\
                                 import { BrowserModule } from '@angular/platform-browser';\r\n\
                                 \r\n\
                                 import { AppComponent }  from './app.component';\r\n\
                                 \r\n\
                                 @NgModule({\r\n\
                                 \x20 imports:      [ BrowserModule ],\r\n\
                                 \x20 declarations: [ AppComponent ],\r\n\
                                 \x20 providers:    [ ],\r\n\
                                 \x20 bootstrap:    [ AppComponent ]\r\n\
                                 })\r\n\
                                 export class AppModule { }\r\n";

fn register(module: &mut ModuleFile, kind: FeatureKind, name: &str, cwd: &Path) {
    let request = ArtifactRequest::new(kind, ArtifactName::parse(name).unwrap());
    let artifact = Blueprint::for_kind(kind).render(&request, cwd).unwrap().artifact;
    let import = module.import_path_for(artifact.file_path());
    module
        .add_to_list(artifact.list_label(), &artifact.symbol_name())
        .unwrap();
    module.ensure_import(&artifact.symbol_name(), &import).unwrap();
}

#[test]
fn service_lands_in_providers_with_import_before_anchor() {
    let mut module = ModuleFile::new("/proj/src/app/app.module.ts", QUICKSTART_MODULE);
    register(&mut module, FeatureKind::Service, "foo", Path::new("/proj/src/app"));

    let text = module.text();
    assert!(text.contains("  providers: [ FooService ],\r\n"));
    assert!(text.contains(
        "import { AppComponent }  from './app.component';\r\n\
         \r\n\
         import { FooService } from './foo.service';\r\n\
         @NgModule({\r\n"
    ));
    assert!(text.contains("  declarations: [ AppComponent ],\r\n"));
}

#[test]
fn every_kind_registers_once() {
    let mut module = ModuleFile::new("/proj/src/app/app.module.ts", QUICKSTART_MODULE);
    let cwd = Path::new("/proj/src/app/shared");

    for _ in 0..2 {
        register(&mut module, FeatureKind::Component, "nav bar", cwd);
        register(&mut module, FeatureKind::Directive, "highlight", cwd);
        register(&mut module, FeatureKind::Pipe, "to-upper", cwd);
    }

    let text = module.text();
    assert!(text.contains(
        "declarations: [ AppComponent, NavBarComponent, HighlightDirective, ToUpperPipe ],"
    ));
    assert_eq!(text.matches("import { NavBarComponent }").count(), 1);
    assert!(text.contains("from './shared/nav-bar/nav-bar.component';"));
    assert!(text.contains("from './shared/highlight.directive';"));
    assert!(text.contains("from './shared/to-upper.pipe';"));
}

#[test]
fn commented_out_code_does_not_count_as_registered() {
    let src = "import { NgModule } from '@angular/core';\n\
               // import { FooService } from './old/foo.service';\n\
               \n\
               @NgModule({\n\
               \t// providers: [ Legacy ],\n\
               \tdeclarations: [ ],\n\
               \tproviders: [ ],\n\
               })\n\
               export class AppModule { }\n";
    let mut module = ModuleFile::new("/proj/src/app/app.module.ts", src);
    register(&mut module, FeatureKind::Service, "foo", Path::new("/proj/src/app"));

    let text = module.text();
    assert!(text.contains("\t// providers: [ Legacy ],\n"));
    assert!(text.contains("\tproviders: [ FooService ],\n"));
    assert!(text.contains("import { FooService } from './foo.service';\n@NgModule({"));
}

#[test]
fn list_insertion_preserves_order_and_is_idempotent() {
    let src = "declarations: [ A, B ],";
    let with_c = list_mutator::insert(src, ListLabel::Declarations, "C").unwrap();
    assert_eq!(with_c, "declarations: [ A, B, C ],");
    assert_eq!(
        list_mutator::insert(&with_c, ListLabel::Declarations, "A").unwrap(),
        with_c
    );
}

#[test]
fn import_insertion_is_idempotent() {
    let once = import_injector::insert(QUICKSTART_MODULE, "X", "./x").unwrap();
    let twice = import_injector::insert(&once, "X", "./x").unwrap();
    assert_eq!(once, twice);
}

#[test]
fn malformed_module_is_rejected_unchanged() {
    let src = "@NgModule({ declarations: [ A ] })";
    let mut module = ModuleFile::new("/p/app.module.ts", src);

    assert_eq!(
        module.add_to_list(ListLabel::Declarations, "B"),
        Err(DomainError::PatternNotFound {
            label: "declarations"
        })
    );
    assert_eq!(module.text(), src);
    assert!(!module.is_changed());
}

#[test]
fn relative_paths_from_nested_modules() {
    assert_eq!(
        relative_import_path(
            Path::new("/proj/src/app"),
            Path::new("/proj/src/app/foo/foo.component.ts")
        ),
        "./foo/foo.component"
    );
    assert_eq!(
        relative_import_path(
            Path::new("/proj/src/app/admin"),
            Path::new("/proj/src/app/core/auth.service.ts")
        ),
        "../core/auth.service"
    );
}
