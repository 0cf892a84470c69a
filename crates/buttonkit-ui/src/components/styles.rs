//! Stylesheet for the class tokens the components emit.
//!
//! Only the tokens the button depends on are defined here: sizes, the
//! `iconOnly`/`readOnly` flags, the loader reveal on `aria-busy`, and the
//! handful of layout utilities in the base class string.

pub const STYLES: &str = r#"
/* === Tokens === */
:root {
  --btn-radius: 0.75rem;
  --btn-border: rgba(255, 255, 255, 0.16);
  --btn-fg: #f5f5f5;
  --btn-bg: transparent;
  --btn-bg-hover: rgba(255, 255, 255, 0.08);
  --btn-bg-pressed: rgba(255, 255, 255, 0.16);
  --btn-focus: #5f8fff;
  --btn-gap: 0.25rem;
}

/* === Utilities used by the base class string === */
.flex { display: flex; }
.inline-flex { display: inline-flex; }
.block { display: block; }
.hidden { display: none; }
.flex-row { flex-direction: row; }
.items-center { align-items: center; }
.justify-center { justify-content: center; }
.justify-start { justify-content: flex-start; }
.justify-between { justify-content: space-between; }
.relative { position: relative; }
.absolute { position: absolute; }
.top-0 { top: 0; }
.right-0 { right: 0; }
.bottom-0 { bottom: 0; }
.left-0 { left: 0; }
.m-auto { margin: auto; }
.border { border-width: 1px; border-style: solid; }
.no-underline { text-decoration: none; }
.shadow-none { box-shadow: none; }
.cursor-pointer { cursor: pointer; }
.select-none { user-select: none; }
.font-bold { font-weight: 700; }
.typo-callout { font-size: 0.9375rem; line-height: 1.25rem; }
.focus-outline:focus-visible { outline: 2px solid var(--btn-focus); outline-offset: 2px; }

/* === Button === */
.btn {
  gap: var(--btn-gap);
  color: var(--btn-fg);
  background: var(--btn-bg);
  border-color: var(--btn-border);
  border-radius: var(--btn-radius);
  transition: background 150ms ease, border-color 150ms ease;
}

.btn:hover { background: var(--btn-bg-hover); }
.btn[aria-pressed="true"] { background: var(--btn-bg-pressed); }
.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.btn.readOnly { pointer-events: none; }

/* === Sizes === */
.btn.xxsmall { height: 1.5rem;  padding: 0 0.5rem;  border-radius: 0.5rem; }
.btn.xsmall  { height: 2rem;    padding: 0 0.75rem; border-radius: 0.625rem; }
.btn.small   { height: 2.5rem;  padding: 0 1rem; }
.btn.medium  { height: 3rem;    padding: 0 1.25rem; }
.btn.large   { height: 3.5rem;  padding: 0 1.5rem;  border-radius: 1rem; }
.btn.xlarge  { height: 4rem;    padding: 0 2rem;    border-radius: 1.25rem; }

.btn.iconOnly { padding: 0; aspect-ratio: 1 / 1; }

/* === Icons === */
.btn .icon:first-child { margin-left: -0.25rem; }
.btn .icon:last-child { margin-right: -0.25rem; }

/* === Loading === */
.btn[aria-busy="true"] > :not(.btn-loader) { visibility: hidden; }
.btn[aria-busy="true"] .btn-loader { display: block; }

.loader { width: 1.5rem; height: 1.5rem; }
.loader-ring { width: 100%; height: 100%; animation: loader-spin 800ms linear infinite; }

@keyframes loader-spin {
  to { transform: rotate(360deg); }
}
"#;
