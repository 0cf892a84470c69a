//! Gallery layout styles. Button styling comes from `buttonkit_ui::STYLES`.

pub const GALLERY_STYLES: &str = r#"
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;
  background: #0a0a0a;
  color: #f5f5f5;
  min-height: 100vh;
}

.gallery {
  max-width: 880px;
  margin: 0 auto;
  padding: 2rem;
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.gallery-header { display: flex; align-items: baseline; gap: 1rem; flex-wrap: wrap; }
.gallery-title { font-size: 2rem; }
.gallery-subtitle { color: rgba(245, 245, 245, 0.5); flex: 1; }
.click-count { color: #00d4aa; }

.gallery-section { display: flex; flex-direction: column; gap: 0.75rem; }
.section-title {
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: rgba(245, 245, 245, 0.5);
}
.section-row { display: flex; align-items: center; gap: 0.75rem; flex-wrap: wrap; }
.section-note { font-size: 0.75rem; color: rgba(245, 245, 245, 0.5); }

.preview-stage {
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 8rem;
  border: 1px dashed rgba(255, 255, 255, 0.16);
  border-radius: 1rem;
}

.btn-primary { background: #f5f5f5; color: #0a0a0a; border-color: transparent; }
.btn-primary:hover { background: #dcdcdc; }
.btn-danger { border-color: #ff3366; color: #ff3366; }
"#;
