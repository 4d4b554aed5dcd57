//! Global CSS styles for Cat Info.
//!
//! The palette hangs off `data-theme` on `<html>`, written by the page's
//! style root whenever the theme changes.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root,
:root[data-theme="light"] {
  --bg-from: #e9d5ff;
  --bg-to: #fbcfe8;
  --surface: #ffffff;
  --text: #1f1630;
  --text-muted: rgba(31, 22, 48, 0.65);
  --shadow: 0 1px 3px rgba(31, 22, 48, 0.12);

  --lilac: #a855f7;
  --lilac-soft: #f3e8ff;
  --rose: #ec4899;
  --rose-soft: #fce7f3;
  --honey-soft: #fef9c3;

  --font-display: 'Fredoka', 'Trebuchet MS', sans-serif;
  --font-body: 'Nunito', 'Segoe UI', sans-serif;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
}

:root[data-theme="dark"] {
  --bg-from: #1b1229;
  --bg-to: #2a1024;
  --surface: #2b2238;
  --text: #f3eefa;
  --text-muted: rgba(243, 238, 250, 0.65);
  --shadow: 0 1px 3px rgba(0, 0, 0, 0.5);

  --lilac-soft: #3b2a52;
  --rose-soft: #4a2038;
  --honey-soft: #47401c;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-body);
  color: var(--text);
  background: linear-gradient(to bottom, var(--bg-from), var(--bg-to));
  min-height: 100vh;
  line-height: 1.6;
  transition: background var(--transition-slow), color var(--transition-slow);
}

/* === Entrance Keyframes === */
.animate {
  will-change: transform, opacity;
}

@keyframes enter-fade {
  from { opacity: var(--anim-from); }
  to { opacity: var(--anim-to); }
}

@keyframes enter-slide-x {
  from { opacity: 0; transform: translateX(var(--anim-from)); }
  to { opacity: 1; transform: translateX(var(--anim-to)); }
}

@keyframes enter-slide-y {
  from { opacity: 0; transform: translateY(var(--anim-from)); }
  to { opacity: 1; transform: translateY(var(--anim-to)); }
}

@keyframes enter-scale {
  from { opacity: 0; transform: scale(var(--anim-from)); }
  to { opacity: 1; transform: scale(var(--anim-to)); }
}

/* === Exit Keyframes === */
@keyframes exit-fade {
  from { opacity: var(--anim-from); }
  to { opacity: var(--anim-to); }
}

@keyframes exit-slide-x {
  from { opacity: 1; transform: translateX(var(--anim-from)); }
  to { opacity: 0; transform: translateX(var(--anim-to)); }
}

@keyframes exit-slide-y {
  from { opacity: 1; transform: translateY(var(--anim-from)); }
  to { opacity: 0; transform: translateY(var(--anim-to)); }
}

@keyframes exit-scale {
  from { opacity: 1; transform: scale(var(--anim-from)); }
  to { opacity: 0; transform: scale(var(--anim-to)); }
}

/* === Page === */
.cat-page {
  min-height: 100vh;
}

.page-toolbar {
  position: fixed;
  top: 1rem;
  right: 1rem;
  z-index: 20;
}

.page-content {
  max-width: 72rem;
  margin: 0 auto;
  padding: 4rem 1rem;
}

/* === Hero === */
.hero {
  position: relative;
  height: 70vh;
  background-size: cover;
  background-position: center;
}

.hero-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  background: rgba(0, 0, 0, 0.5);
}

.hero-title {
  font-family: var(--font-display);
  font-size: 4.5rem;
  font-weight: 700;
  color: #ffffff;
  text-align: center;
}

.hero-subtitle {
  font-size: 1.5rem;
  color: #ffffff;
  text-align: center;
}

.hero-badge {
  padding: 0.25rem 0.9rem;
  border-radius: 999px;
  background: var(--rose);
  color: #ffffff;
  font-size: 0.875rem;
  font-weight: 600;
}

.hero-paw {
  position: absolute;
  bottom: 1rem;
  left: 1rem;
}

.hero-paw.leaving {
  pointer-events: none;
}

/* === Theme Switch === */
.theme-switch {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.35rem 0.75rem;
  border-radius: 999px;
  background: var(--surface);
  box-shadow: var(--shadow);
}

.switch {
  position: relative;
  width: 2.75rem;
  height: 1.5rem;
  border: none;
  border-radius: 999px;
  background: var(--lilac-soft);
  cursor: pointer;
  transition: background var(--transition-normal);
}

.switch.checked {
  background: var(--lilac);
}

.switch-thumb {
  position: absolute;
  top: 0.125rem;
  left: 0.125rem;
  width: 1.25rem;
  height: 1.25rem;
  border-radius: 50%;
  background: #ffffff;
  transition: transform var(--transition-normal);
}

.switch.checked .switch-thumb {
  transform: translateX(1.25rem);
}

/* === Tabs === */
.tab-list {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 0.25rem;
  padding: 0.25rem;
  border-radius: 0.75rem;
  background: var(--lilac-soft);
}

.tab-trigger {
  padding: 0.5rem 1rem;
  border: none;
  border-radius: 0.5rem;
  background: transparent;
  color: var(--text-muted);
  font: inherit;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.tab-trigger.active {
  background: var(--surface);
  color: var(--text);
  box-shadow: var(--shadow);
}

.tab-panel {
  margin-top: 1rem;
}

.card {
  border-radius: 1rem;
  background: var(--surface);
  box-shadow: var(--shadow);
}

.card-header {
  padding: 1.5rem 1.5rem 0.5rem;
}

.card-title {
  font-family: var(--font-display);
  font-size: 1.5rem;
}

.card-description {
  color: var(--text-muted);
}

.card-content {
  padding: 1rem 1.5rem 1.5rem;
}

.characteristics-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1rem;
  list-style: none;
}

.characteristic-item {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem;
  border-radius: 0.5rem;
  background: var(--lilac-soft);
  box-shadow: var(--shadow);
}

.characteristic-paw {
  color: var(--lilac);
  flex-shrink: 0;
}

.breed-carousel {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
  margin-bottom: 1.5rem;
}

.breed-featured {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
}

.breed-featured img {
  width: 12rem;
  height: 12rem;
  border-radius: 1rem;
  object-fit: cover;
}

.breed-featured figcaption {
  font-weight: 700;
}

.breeds-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1rem;
  list-style: none;
}

.breed-item {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 1rem;
  border-radius: 0.5rem;
  background: var(--rose-soft);
  box-shadow: var(--shadow);
  border: 2px solid transparent;
}

.breed-item.selected {
  border-color: var(--rose);
}

.breed-photo {
  width: 6rem;
  height: 6rem;
  margin-bottom: 0.5rem;
  border-radius: 50%;
  object-fit: cover;
}

.breed-name {
  font-weight: 600;
}

.facts-list {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  list-style: none;
}

.fact-item {
  padding: 1rem;
  border-radius: 0.5rem;
  background: var(--honey-soft);
  box-shadow: var(--shadow);
}

/* === Buttons === */
.btn-like {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem 1.5rem;
  border: none;
  border-radius: 999px;
  background: linear-gradient(to right, var(--rose), var(--lilac));
  color: #ffffff;
  font: inherit;
  font-size: 1.125rem;
  font-weight: 600;
  box-shadow: 0 10px 15px rgba(236, 72, 153, 0.3);
  cursor: pointer;
  transition: transform var(--transition-fast), filter var(--transition-fast);
}

.btn-like:hover {
  transform: scale(1.05);
  filter: brightness(0.95);
}

.btn-like:active {
  transform: scale(0.95);
}

.btn-like:hover .like-heart {
  color: #fecaca;
}

.icon-btn {
  width: 2.5rem;
  height: 2.5rem;
  border: none;
  border-radius: 50%;
  background: var(--rose-soft);
  color: var(--text);
  font-size: 1.5rem;
  line-height: 1;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.icon-btn:hover {
  background: var(--rose);
  color: #ffffff;
}

/* === Like Section === */
.like-section {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.5rem;
  margin-top: 3rem;
}

.happiness-meter {
  width: 100%;
  max-width: 28rem;
}

.happiness-header {
  display: flex;
  justify-content: space-between;
  margin-bottom: 0.35rem;
  font-size: 0.875rem;
}

.happiness-mood {
  color: var(--text-muted);
}

.happiness-track {
  height: 0.75rem;
  border-radius: 999px;
  background: var(--rose-soft);
  overflow: hidden;
}

.happiness-fill {
  height: 100%;
  border-radius: 999px;
  background: linear-gradient(to right, var(--lilac), var(--rose));
  transition: width var(--transition-slow);
}

/* === Scroll Follower === */
.scroll-follower {
  position: fixed;
  top: 1.25rem;
  left: 1.25rem;
  z-index: 20;
  color: var(--rose);
  pointer-events: none;
  transition: transform var(--transition-fast), opacity var(--transition-slow);
}

/* === Toasts === */
.toast-stack {
  position: fixed;
  right: 1rem;
  bottom: 1rem;
  z-index: 30;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  list-style: none;
}

.toast {
  min-width: 16rem;
  padding: 0.75rem 1rem;
  border-radius: 0.75rem;
  background: var(--surface);
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
  animation: enter-slide-y 200ms ease-out both;
  --anim-from: 16px;
  --anim-to: 0px;
}

.toast-title {
  font-weight: 700;
}

.toast-description {
  color: var(--text-muted);
  font-size: 0.875rem;
}
"#;
