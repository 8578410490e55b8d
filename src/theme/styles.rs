//! Global CSS for the folio app.
//!
//! Frosted-glass card aesthetic over a dark base. The `expand-grid`,
//! `sheet-*`, `overlay-*`, and `media-grid--*` families carry the behavior
//! the interactive components depend on.

pub const GLOBAL_STYLES: &str = r#"
/* === Custom properties === */
:root {
  --bg-base: #0b0d12;
  --glass-bg: rgba(255, 255, 255, 0.04);
  --glass-bg-hover: rgba(255, 255, 255, 0.07);
  --glass-border: rgba(255, 255, 255, 0.1);

  --text-primary: #f4f6fb;
  --text-secondary: rgba(244, 246, 251, 0.72);
  --text-tertiary: rgba(244, 246, 251, 0.55);
  --text-muted: rgba(244, 246, 251, 0.4);

  --accent-from: #8b5cf6;
  --accent-to: #22d3ee;

  --media-aurora: linear-gradient(135deg, #312e81, #155e75);
  --media-tide: linear-gradient(135deg, #0c4a6e, #134e4a);
  --media-ember: linear-gradient(135deg, #7c2d12, #831843);
  --media-moss: linear-gradient(135deg, #14532d, #1e3a5f);
  --media-violet: linear-gradient(135deg, #4c1d95, #701a75);
  --media-neutral: linear-gradient(135deg, #1e293b, #334155);

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: 'Inter', 'Helvetica Neue', Arial, sans-serif;
  background: var(--bg-base);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Page scaffold === */
.page {
  max-width: 64rem;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.hero {
  min-height: 60vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
  gap: 1rem;
}

.hero-name {
  font-size: 3.5rem;
  font-weight: 700;
  letter-spacing: -0.02em;
}

.hero-subtitle {
  font-size: 1.25rem;
  color: var(--text-secondary);
  font-weight: 300;
}

.hero-ctas {
  display: flex;
  gap: 0.75rem;
  margin-top: 1rem;
}

.cta {
  padding: 0.65rem 1.25rem;
  border-radius: 0.75rem;
  font-size: 0.875rem;
  color: var(--text-secondary);
  text-decoration: none;
}

.cta:hover {
  color: var(--text-primary);
}

.section {
  padding: 5rem 0;
}

.section-title {
  font-size: 2rem;
  font-weight: 700;
  margin-bottom: 2.5rem;
}

.accent {
  background: linear-gradient(90deg, var(--accent-from), var(--accent-to));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

/* === Glass surfaces === */
.glass-card {
  background: var(--glass-bg);
  border: 1px solid var(--glass-border);
  backdrop-filter: blur(12px);
  transition: background var(--transition-fast);
}

.glass-card:hover {
  background: var(--glass-bg-hover);
}

.skill-tag {
  font-size: 0.7rem;
  padding: 0.2rem 0.6rem;
  border-radius: 999px;
  border: 1px solid var(--glass-border);
  color: var(--text-tertiary);
  white-space: nowrap;
}

.tag-row {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-top: 1rem;
}

/* === Experience timeline === */
.timeline {
  position: relative;
  padding-left: 1.5rem;
  border-left: 1px solid var(--glass-border);
}

.experience-item {
  position: relative;
  margin-bottom: 2.5rem;
}

.timeline-dot {
  position: absolute;
  left: -1.85rem;
  top: 1.6rem;
  width: 0.65rem;
  height: 0.65rem;
  border-radius: 50%;
  background: linear-gradient(135deg, var(--accent-from), var(--accent-to));
}

/* === Disclosure card === */
.disclosure-card {
  border-radius: 1rem;
  padding: 1.5rem;
  outline: none;
}

.disclosure-card.expandable {
  cursor: pointer;
}

.disclosure-card.expandable:focus-visible {
  border-color: var(--accent-to);
}

.disclosure-head {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: 0.5rem;
  margin-bottom: 0.65rem;
}

.disclosure-title {
  font-size: 1.05rem;
  font-weight: 600;
  line-height: 1.35;
}

.disclosure-subtitle {
  font-size: 0.875rem;
  color: var(--accent-to);
}

.disclosure-period {
  font-size: 0.75rem;
  font-family: 'JetBrains Mono', 'SF Mono', monospace;
  color: var(--text-muted);
  white-space: nowrap;
  margin-top: 0.25rem;
}

.disclosure-summary {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.expand-hint {
  display: flex;
  align-items: center;
  gap: 0.4rem;
  margin-top: 0.75rem;
  font-size: 0.75rem;
  color: var(--accent-to);
  opacity: 0.55;
  transition: opacity var(--transition-fast);
}

.disclosure-card.expandable:hover .expand-hint {
  opacity: 0.95;
}

/* Height-animated reveal, 0fr -> 1fr */
.expand-grid {
  display: grid;
  transition: grid-template-rows var(--transition-normal);
}

.expand-clip {
  overflow: hidden;
}

.expand-body {
  padding-top: 1rem;
  margin-top: 1rem;
  border-top: 1px solid var(--glass-border);
}

.detail-text {
  font-size: 0.875rem;
  color: var(--text-secondary);
  margin-bottom: 0.75rem;
}

/* === Bottom sheet (compact disclosure) === */
.sheet-layer {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: flex-end;
}

.sheet-backdrop {
  position: absolute;
  inset: 0;
  background: rgba(0, 0, 0, 0.5);
  backdrop-filter: blur(4px);
}

.bottom-sheet {
  position: relative;
  width: 100%;
  max-height: 85vh;
  overflow-y: auto;
  background: rgba(18, 21, 30, 0.92);
  border-top: 1px solid var(--glass-border);
  border-radius: 1.5rem 1.5rem 0 0;
  padding: 1.5rem 1.5rem 2.5rem;
  animation: sheet-enter 250ms ease-out;
}

.sheet-grip {
  width: 2.5rem;
  height: 0.25rem;
  border-radius: 999px;
  background: var(--glass-border);
  margin: 0 auto 1.5rem;
}

.sheet-close {
  display: block;
  width: 100%;
  margin-top: 1.25rem;
  padding: 0.75rem;
  border-radius: 0.75rem;
  border: 1px solid var(--glass-border);
  background: var(--glass-bg);
  color: var(--text-secondary);
  font-size: 0.875rem;
  cursor: pointer;
}

@keyframes sheet-enter {
  from { transform: translateY(100%); }
  to { transform: translateY(0); }
}

/* === Overlay === */
.overlay-layer {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1.5rem;
  animation: overlay-enter 200ms ease-out;
}

.overlay-backdrop {
  position: absolute;
  inset: 0;
  background: rgba(0, 0, 0, 0.5);
  backdrop-filter: blur(4px);
}

.overlay-panel {
  position: relative;
  width: 100%;
  max-width: 60rem;
  max-height: 90vh;
  overflow-y: auto;
  background: rgba(18, 21, 30, 0.92);
  border: 1px solid var(--glass-border);
  border-radius: 1.5rem;
  animation: panel-enter 250ms ease-out;
}

.overlay-close {
  position: absolute;
  top: 1rem;
  right: 1rem;
  z-index: 10;
  padding: 0.5rem;
  border-radius: 0.75rem;
  border: 1px solid var(--glass-border);
  background: var(--glass-bg);
  color: var(--text-secondary);
  cursor: pointer;
  display: flex;
}

.overlay-close:hover {
  background: var(--glass-bg-hover);
}

.overlay-content {
  padding: 1.5rem 2rem;
}

.overlay-title {
  font-size: 1.5rem;
  font-weight: 600;
  padding-right: 2rem;
}

.overlay-summary {
  font-size: 0.95rem;
  color: var(--text-secondary);
  margin-top: 0.75rem;
}

.overlay-details {
  margin-top: 1.25rem;
}

@keyframes overlay-enter {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes panel-enter {
  from { transform: translateY(0.75rem) scale(0.98); opacity: 0; }
  to { transform: translateY(0) scale(1); opacity: 1; }
}

/* === Overlay media grids === */
.media-grid {
  display: grid;
  gap: 0.5rem;
  padding: 0.75rem 0.75rem 0;
}

.media-slot {
  border-radius: 1rem;
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 8rem;
}

.media-grid--single .media-slot {
  aspect-ratio: 16 / 9;
}

.media-grid--pair {
  grid-template-columns: 1fr 1fr;
}

.media-grid--pair .media-slot {
  aspect-ratio: 4 / 3;
}

.media-grid--six {
  grid-template-columns: repeat(4, 1fr);
  grid-template-rows: 1fr 1fr;
  min-height: 20rem;
}

.media-slot--primary {
  grid-column: span 2;
  grid-row: span 2;
}

.media-slot-caption {
  text-align: center;
  color: var(--text-muted);
}

.media-slot-caption p {
  font-size: 0.7rem;
  margin-top: 0.35rem;
}

/* === Showcase cards === */
.showcase-card {
  border-radius: 1.5rem;
  overflow: hidden;
}

.showcase-card.featured {
  margin-bottom: 1.5rem;
}

.showcase-card.clickable {
  cursor: pointer;
}

.media-placeholder {
  display: flex;
  align-items: center;
  justify-content: center;
}

.aspect-wide {
  aspect-ratio: 16 / 9;
}

.aspect-photo {
  aspect-ratio: 4 / 3;
}

.showcase-body {
  padding: 1.5rem;
}

.showcase-body.roomy {
  padding: 2rem;
}

.showcase-title {
  font-size: 1.15rem;
  font-weight: 600;
}

.showcase-title.large {
  font-size: 1.5rem;
}

.showcase-summary {
  font-size: 0.9rem;
  color: var(--text-secondary);
  margin-top: 0.5rem;
}

.see-details {
  display: flex;
  align-items: center;
  gap: 0.25rem;
  margin-top: 1rem;
  font-size: 0.75rem;
  color: var(--accent-to);
  opacity: 0.4;
  transition: opacity var(--transition-fast);
}

.showcase-card.clickable:hover .see-details {
  opacity: 0.85;
}

/* === Card grid + show-more === */
.card-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1.5rem;
}

.overflow-reveal {
  margin-top: 1.5rem;
}

.show-more-toggle {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin: 1.5rem auto 0;
  padding: 0.65rem 1.25rem;
  border-radius: 0.75rem;
  border: 1px solid var(--glass-border);
  background: var(--glass-bg);
  color: var(--text-secondary);
  font-size: 0.875rem;
  cursor: pointer;
}

.show-more-toggle:hover {
  color: var(--text-primary);
}

.chevron {
  display: flex;
  transition: transform var(--transition-normal);
}

/* === Compact viewport === */
@media (max-width: 767px) {
  .hero-name {
    font-size: 2.5rem;
  }

  .card-grid {
    grid-template-columns: 1fr;
  }

  .media-grid--pair {
    grid-template-columns: 1fr;
  }

  .media-grid--six {
    grid-template-columns: 1fr;
    grid-template-rows: none;
    min-height: 0;
  }

  .media-grid--six .media-slot--primary {
    grid-column: auto;
    grid-row: auto;
    aspect-ratio: 16 / 9;
  }

  .media-grid--six .media-slot {
    aspect-ratio: 16 / 9;
  }

  /* At most two slots stay visible on compact viewports */
  .media-grid--six .media-slot:nth-child(n+3) {
    display: none;
  }

  .overlay-content {
    padding: 1.25rem 1.5rem;
  }
}
"#;
