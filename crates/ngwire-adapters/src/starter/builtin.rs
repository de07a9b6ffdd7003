//! The Angular quickstart shipped inside the binary.

use std::path::Path;

use ngwire_core::{
    application::ports::StarterSource,
    domain::{ProjectStructure, RenderContext},
    error::NgwireResult,
};

/// `(path, content)` pairs; `{{PROJECT_NAME}}` is substituted on load.
const FILES: &[(&str, &str)] = &[
    (
        "package.json",
        r#"{
  "name": "{{PROJECT_NAME}}",
  "version": "1.0.0",
  "scripts": {
    "build": "tsc -p src/",
    "build:watch": "tsc -p src/ -w",
    "serve": "lite-server -c=bs-config.json",
    "prestart": "npm run build",
    "start": "concurrently \"npm run build:watch\" \"npm run serve\""
  },
  "license": "MIT",
  "dependencies": {
    "@angular/common": "~2.4.0",
    "@angular/compiler": "~2.4.0",
    "@angular/core": "~2.4.0",
    "@angular/forms": "~2.4.0",
    "@angular/http": "~2.4.0",
    "@angular/platform-browser": "~2.4.0",
    "@angular/platform-browser-dynamic": "~2.4.0",
    "@angular/router": "~3.4.0",
    "core-js": "^2.4.1",
    "rxjs": "5.0.1",
    "systemjs": "0.19.40",
    "zone.js": "^0.7.4"
  },
  "devDependencies": {
    "concurrently": "^3.2.0",
    "lite-server": "^2.2.2",
    "typescript": "~2.0.10"
  }
}
"#,
    ),
    (
        "bs-config.json",
        r#"{
  "server": {
    "baseDir": "src",
    "routes": {
      "/node_modules": "node_modules"
    }
  }
}
"#,
    ),
    (
        "src/tsconfig.json",
        r#"{
  "compilerOptions": {
    "target": "es5",
    "module": "commonjs",
    "moduleResolution": "node",
    "sourceMap": true,
    "emitDecoratorMetadata": true,
    "experimentalDecorators": true,
    "lib": [ "es2015", "dom" ],
    "noImplicitAny": true,
    "suppressImplicitAnyIndexErrors": true
  }
}
"#,
    ),
    (
        "src/index.html",
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>{{PROJECT_NAME}}</title>
    <base href="/">
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <link rel="stylesheet" href="styles.css">

    <script src="node_modules/core-js/client/shim.min.js"></script>
    <script src="node_modules/zone.js/dist/zone.js"></script>
    <script src="node_modules/systemjs/dist/system.src.js"></script>
    <script src="systemjs.config.js"></script>
    <script>
      System.import('main.js').catch(function(err){ console.error(err); });
    </script>
  </head>

  <body>
    <my-app>Loading...</my-app>
  </body>
</html>
"#,
    ),
    (
        "src/styles.css",
        "h1 {\n  color: #369;\n  font-family: Arial, Helvetica, sans-serif;\n}\n",
    ),
    (
        "src/systemjs.config.js",
        r#"(function (global) {
  System.config({
    paths: {
      'npm:': 'node_modules/'
    },
    map: {
      app: 'app',
      '@angular/core': 'npm:@angular/core/bundles/core.umd.js',
      '@angular/common': 'npm:@angular/common/bundles/common.umd.js',
      '@angular/compiler': 'npm:@angular/compiler/bundles/compiler.umd.js',
      '@angular/platform-browser': 'npm:@angular/platform-browser/bundles/platform-browser.umd.js',
      '@angular/platform-browser-dynamic': 'npm:@angular/platform-browser-dynamic/bundles/platform-browser-dynamic.umd.js',
      '@angular/http': 'npm:@angular/http/bundles/http.umd.js',
      '@angular/router': 'npm:@angular/router/bundles/router.umd.js',
      '@angular/forms': 'npm:@angular/forms/bundles/forms.umd.js',
      'rxjs': 'npm:rxjs'
    },
    packages: {
      app: { defaultExtension: 'js' },
      rxjs: { defaultExtension: 'js' }
    }
  });
})(this);
"#,
    ),
    (
        "src/main.ts",
        "import { platformBrowserDynamic } from '@angular/platform-browser-dynamic';\r\n\
         \r\n\
         import { AppModule } from './app/app.module';\r\n\
         \r\n\
         platformBrowserDynamic().bootstrapModule(AppModule);\r\n",
    ),
    (
        "src/app/app.module.ts",
        "import { NgModule }      from '@angular/core';\r\n\
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
         export class AppModule { }\r\n",
    ),
    (
        "src/app/app.component.ts",
        "import { Component } from '@angular/core';\r\n\
         \r\n\
         @Component({\r\n\
         \x20 selector: 'my-app',\r\n\
         \x20 template: `<h1>Hello {{name}}</h1>`,\r\n\
         })\r\n\
         export class AppComponent { name = '{{PROJECT_NAME}}'; }\r\n",
    ),
];

/// Starter files compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStarter;

impl BuiltinStarter {
    pub fn new() -> Self {
        Self
    }
}

impl StarterSource for BuiltinStarter {
    fn load(&self, root: &Path, project_name: &str) -> NgwireResult<ProjectStructure> {
        let ctx = RenderContext::for_project(project_name);
        let structure = FILES
            .iter()
            .fold(ProjectStructure::new(root), |s, (path, content)| {
                s.with_file(*path, ctx.render(content))
            });
        Ok(structure)
    }

    fn describe(&self) -> String {
        "built-in Angular quickstart".into()
    }
}
