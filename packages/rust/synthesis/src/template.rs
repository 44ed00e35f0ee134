//! Deterministic rendering of the generated project tree.
//!
//! Takes branding fields, an optional logo, and the extracted post list,
//! then renders the four files of a Create React App starter: manifest,
//! entry point, root component, and markup shell. Branding fields are
//! interpolated as literal text; the post list is embedded as a JSON
//! array literal.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use sitesmith_shared::{Branding, Logo, PostEntry, ProjectFile, Result, SitesmithError};

/// Package name written into the generated manifest.
const PROJECT_NAME: &str = "generated-react-template";

/// Entry-point source: mounts the root component into the DOM container.
const ENTRY_POINT: &str = r#"import React from 'react';
import ReactDOM from 'react-dom/client';
import App from './App';

const root = ReactDOM.createRoot(document.getElementById('root'));
root.render(<App />);
"#;

/// Render the complete project tree for one generation request.
///
/// The returned files are ordered; paths are unique and fixed:
/// `package.json`, `src/index.js`, `src/App.js`, `public/index.html`.
pub fn project_files(
    branding: &Branding,
    logo: Option<&Logo>,
    posts: &[PostEntry],
) -> Result<Vec<ProjectFile>> {
    let logo_ref = logo.map(logo_data_uri).unwrap_or_default();

    Ok(vec![
        ProjectFile::text("package.json", render_manifest()?),
        ProjectFile::text("src/index.js", ENTRY_POINT),
        ProjectFile::text("src/App.js", render_app_component(branding, &logo_ref, posts)?),
        ProjectFile::text("public/index.html", render_index_html(&branding.title)),
    ])
}

/// Encode an uploaded logo as a self-contained `data:` URI for direct
/// embedding in the generated markup.
pub fn logo_data_uri(logo: &Logo) -> String {
    format!(
        "data:{};base64,{}",
        logo.media_type,
        STANDARD.encode(&logo.data)
    )
}

/// Render `package.json`: project name, the fixed React dependency set,
/// and the four standard scripts.
fn render_manifest() -> Result<String> {
    let manifest = serde_json::json!({
        "name": PROJECT_NAME,
        "version": "1.0.0",
        "private": true,
        "dependencies": {
            "react": "^18.2.0",
            "react-dom": "^18.2.0",
            "react-scripts": "5.0.1",
        },
        "scripts": {
            "start": "react-scripts start",
            "build": "react-scripts build",
            "test": "react-scripts test",
            "eject": "react-scripts eject",
        },
    });

    serde_json::to_string_pretty(&manifest)
        .map_err(|e| SitesmithError::Render(format!("failed to render package.json: {e}")))
}

/// Render the root component: branded header plus the post-link section.
///
/// An empty `logo_ref` renders a falsy `logo` constant, so the component
/// omits the image element entirely.
fn render_app_component(
    branding: &Branding,
    logo_ref: &str,
    posts: &[PostEntry],
) -> Result<String> {
    let posts_json = serde_json::to_string(posts)
        .map_err(|e| SitesmithError::Render(format!("failed to encode posts: {e}")))?;

    Ok(format!(
        r#"import React from 'react';

const posts = {posts_json};
const logo = "{logo_ref}";

export default function App() {{
  return (
    <div style={{{{ fontFamily: 'Arial, sans-serif', padding: 20 }}}}>
      <header style={{{{ display: 'flex', alignItems: 'center', gap: '1rem' }}}}>
        {{logo && <img src={{logo}} alt="Logo" style={{{{ height: 60 }}}} />}}
        <div>
          <h1>{title}</h1>
          <p>Contact: {phone} | {email}</p>
          <address>{address}</address>
        </div>
      </header>

      <section>
        <h2>Latest Posts</h2>
        <ul>
          {{posts.map((post, idx) => (
            <li key={{idx}}>
              <a href={{post.link}} target="_blank" rel="noopener noreferrer">{{post.title}}</a>
            </li>
          ))}}
        </ul>
      </section>
    </div>
  );
}}
"#,
        title = branding.title,
        phone = branding.phone,
        email = branding.email,
        address = branding.address,
    ))
}

/// Render the markup shell: page title and the empty mount container.
fn render_index_html(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{title}</title>
</head>
<body>
  <div id="root"></div>
</body>
</html>
"#
    )
}
