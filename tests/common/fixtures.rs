/// A guide page that opts in to the sidebar, with authored and missing ids.
pub const GUIDE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Guide</title></head>
<body>
<span id="with-index"></span>
<div id="main">
  <h2>Introduction</h2>
  <p>Welcome.</p>
  <h3>Audience</h3>
  <h3 id="prereqs">Prerequisites</h3>
  <h2>Installing <code>docnav</code></h2>
  <pre><code>cargo install docnav</code></pre>
  <h2>Usage</h2>
  <h3>Sidebar</h3>
</div>
<footer>End</footer>
</body>
</html>"#;

/// Same content without the opt-in marker.
pub const PLAIN_PAGE: &str = r#"<!DOCTYPE html>
<html><head></head><body>
<div id="main"><h2>Only</h2><h3>Heading</h3></div>
</body></html>"#;

/// A page that starts with an h3 before any h2.
pub const LEADING_SECTION_PAGE: &str = r#"<!DOCTYPE html>
<html><head></head><body>
<span id="with-index"></span>
<div id="main"><h3>Preface</h3><h3>Notes</h3><h2>Chapter</h2><h3>Part</h3></div>
</body></html>"#;

/// Opts in but has no main container.
pub const NO_MAIN_PAGE: &str = r#"<!DOCTYPE html>
<html><head></head><body>
<span id="with-index"></span>
<article><h2>Stray</h2></article>
</body></html>"#;

/// An h3 nested inside an h2 through a wrapper element.
pub const NESTED_HEADING_PAGE: &str = r#"<!DOCTYPE html>
<html><head></head><body>
<span id="with-index"></span>
<div id="main"><h2>A<div><h3>Inner</h3></div></h2></div>
</body></html>"#;

/// Opts in and carries an inert template.
pub const TEMPLATE_PAGE: &str = r#"<!DOCTYPE html>
<html><head></head><body>
<span id="with-index"></span>
<div id="main"><h2>Rows</h2><template id="row"><tr><td>cell</td></tr></template></div>
</body></html>"#;
