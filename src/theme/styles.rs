//! Global CSS for the portfolio page.
//!
//! Warm industrial palette: deep navy hero, amber accents, paper
//! surface. Mobile-first; the 768px query switches the header to the
//! desktop link row and unfolds the timeline to its two-column shape.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BACKDROP */
  --navy-deep: #172554;
  --navy: #1e3a8a;
  --ink: #0f172a;

  /* ACCENT */
  --amber: #f97316;
  --amber-deep: #ea580c;
  --amber-glow: rgba(249, 115, 22, 0.3);

  /* SURFACE */
  --paper: #f8fafc;
  --card: #ffffff;
  --panel-dark: #1e293b;

  /* TEXT */
  --text-primary: #1e293b;
  --text-secondary: #475569;
  --text-muted: #64748b;
  --text-on-dark: #dbeafe;

  /* SEMANTIC */
  --link-blue: #2563eb;
  --available-green: #4ade80;
  --rail-blue: #bfdbfe;

  /* Typography */
  --font-sans: -apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 2.75rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-reveal: 0.8s cubic-bezier(0.5, 0, 0, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--paper);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
  overflow-x: hidden;
}

.container {
  max-width: 72rem;
  margin: 0 auto;
  padding: 0 1.5rem;
}

ul {
  list-style: none;
}

a {
  text-decoration: none;
  color: inherit;
}

/* === Buttons === */
.btn-solid {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  background: var(--amber);
  color: #ffffff;
  border: none;
  border-radius: 0.5rem;
  padding: 0.75rem 2rem;
  font-weight: 700;
  font-size: var(--text-base);
  cursor: pointer;
  box-shadow: 0 10px 25px -5px var(--amber-glow);
  transition: background var(--transition-normal), transform var(--transition-normal);
}

.btn-solid:hover {
  background: var(--amber-deep);
  transform: translateY(-0.25rem);
}

.btn-outline {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  background: transparent;
  color: #ffffff;
  border: 1px solid rgba(255, 255, 255, 0.3);
  border-radius: 0.5rem;
  padding: 0.75rem 2rem;
  font-weight: 700;
  font-size: var(--text-base);
  cursor: pointer;
  transition: background var(--transition-normal), border-color var(--transition-normal);
}

.btn-outline:hover {
  background: rgba(255, 255, 255, 0.1);
  border-color: #ffffff;
}

.btn-quiet {
  background: transparent;
  border: none;
  color: var(--text-secondary);
  cursor: pointer;
  font-size: var(--text-sm);
  transition: color var(--transition-fast);
}

.btn-quiet:hover {
  color: var(--text-primary);
}

.icon-btn {
  background: transparent;
  border: none;
  color: inherit;
  cursor: pointer;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 0.25rem;
}

/* === Navigation Bar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  z-index: 50;
  background: transparent;
  padding: 1rem 0;
  transition: background var(--transition-normal), box-shadow var(--transition-normal),
    padding var(--transition-normal);
}

.navbar.scrolled {
  background: var(--card);
  box-shadow: 0 4px 6px -1px rgba(15, 23, 42, 0.1);
  padding: 0.5rem 0;
}

.nav-inner {
  max-width: 72rem;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.brand {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.brand-mark {
  background: var(--amber);
  color: #ffffff;
  padding: 0.5rem;
  border-radius: 0.5rem;
  display: inline-flex;
  box-shadow: 0 10px 15px -3px rgba(15, 23, 42, 0.2);
}

.brand-name {
  font-size: var(--text-lg);
  font-weight: 800;
  letter-spacing: -0.01em;
  color: var(--ink);
  text-transform: uppercase;
}

.brand-accent {
  color: var(--amber);
}

.nav-links {
  display: none;
  align-items: center;
  gap: 2rem;
}

.nav-link {
  font-size: var(--text-sm);
  font-weight: 500;
  color: rgba(255, 255, 255, 0.9);
  transition: color var(--transition-fast);
}

.navbar.scrolled .nav-link {
  color: var(--text-secondary);
}

.nav-link:hover {
  color: var(--amber);
}

.btn-hire {
  padding: 0.5rem 1.25rem;
  border-radius: 9999px;
  font-size: var(--text-sm);
  font-weight: 500;
}

.menu-toggle {
  display: inline-flex;
  color: var(--ink);
}

/* === Mobile Dropdown === */
.mobile-menu {
  position: absolute;
  top: 100%;
  left: 0;
  width: 100%;
  background: var(--card);
  box-shadow: 0 10px 15px -3px rgba(15, 23, 42, 0.1);
  border-top: 1px solid #f1f5f9;
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 0 1.5rem;
  max-height: 0;
  opacity: 0;
  overflow: hidden;
  transition: max-height 500ms ease-in-out, opacity 500ms ease-in-out,
    padding 500ms ease-in-out;
}

.mobile-menu.open {
  max-height: 24rem;
  opacity: 1;
  padding: 1rem 1.5rem;
}

.mobile-menu-link {
  color: var(--text-secondary);
  font-weight: 500;
  padding: 0.5rem 0;
  border-bottom: 1px solid var(--paper);
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 90vh;
  display: flex;
  align-items: center;
  overflow: hidden;
  padding: 8rem 0 6rem;
  background: linear-gradient(to bottom right, var(--navy-deep), var(--navy), var(--ink));
  clip-path: polygon(0 0, 100% 0, 100% 85%, 0 100%);
}

.hero-backdrop {
  position: absolute;
  inset: 0;
  opacity: 0.1;
  pointer-events: none;
}

.hero-ring {
  position: absolute;
  border: 4px solid #ffffff;
  border-radius: 50%;
  mix-blend-mode: overlay;
}

.hero-ring.solid {
  top: 2.5rem;
  left: 2.5rem;
  width: 16rem;
  height: 16rem;
}

.hero-ring.dashed {
  bottom: 2.5rem;
  right: 2.5rem;
  width: 24rem;
  height: 24rem;
  border-style: dashed;
}

.hero-inner {
  position: relative;
  z-index: 10;
  width: 100%;
  max-width: 72rem;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.hero-badge {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.1);
  border: 1px solid rgba(255, 255, 255, 0.2);
  backdrop-filter: blur(12px);
  color: var(--text-on-dark);
  font-size: var(--text-xs);
  font-weight: 600;
  margin-bottom: 1.5rem;
}

.badge-dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 50%;
  background: var(--available-green);
  animation: pulse 2s ease-in-out infinite;
}

.hero-title {
  color: #ffffff;
  font-size: var(--text-3xl);
  font-weight: 800;
  line-height: 1.15;
  margin-bottom: 1.5rem;
}

.hero-title-accent {
  background: linear-gradient(to right, #fb923c, #fde047);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-lead {
  color: var(--text-on-dark);
  font-size: var(--text-lg);
  line-height: 1.7;
  max-width: 42rem;
  margin-bottom: 2rem;
}

.hero-actions {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.hero-cta {
  font-size: var(--text-base);
}

/* Staggered entrance */
.hero-step-1 { animation: fade-in-up 0.8s ease-out forwards; opacity: 0; }
.hero-step-2 { animation: fade-in-up 0.8s ease-out 0.2s forwards; opacity: 0; }
.hero-step-3 { animation: fade-in-up 0.8s ease-out 0.4s forwards; opacity: 0; }
.hero-step-4 { animation: fade-in-up 0.8s ease-out 0.6s forwards; opacity: 0; }

@keyframes fade-in-up {
  from {
    opacity: 0;
    transform: translate3d(0, 40px, 0);
  }
  to {
    opacity: 1;
    transform: translate3d(0, 0, 0);
  }
}

/* Ambient marquee along the hero base */
.truck-lane {
  position: absolute;
  bottom: 1rem;
  left: 0;
  width: 100%;
  pointer-events: none;
  opacity: 0.2;
  color: #ffffff;
}

.truck-rig {
  display: flex;
  align-items: center;
  animation: move-truck 15s linear infinite;
}

@keyframes move-truck {
  0% { transform: translateX(-100%); }
  100% { transform: translateX(100vw); }
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.6; }
}

/* === Stat Strip === */
.stat-strip {
  position: relative;
  z-index: 20;
  margin-top: -3rem;
  padding: 3rem 1.5rem 0;
  max-width: 72rem;
  margin-left: auto;
  margin-right: auto;
}

.stat-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1.5rem;
}

.stat-card {
  background: var(--card);
  padding: 1.5rem;
  border-radius: 0.75rem;
  border-bottom: 4px solid var(--amber);
  box-shadow: 0 20px 25px -5px rgba(148, 163, 184, 0.35);
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
}

.stat-icon {
  background: #eff6ff;
  color: var(--link-blue);
  padding: 0.75rem;
  border-radius: 50%;
  display: inline-flex;
  margin-bottom: 0.75rem;
}

.stat-value {
  font-size: var(--text-xl);
  font-weight: 700;
  color: var(--text-primary);
}

.stat-label {
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--text-muted);
}

/* === About === */
.about {
  padding: 5rem 0;
  background: var(--card);
}

.about-grid {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 3rem;
}

.about-col {
  width: 100%;
}

.competency-stack {
  position: relative;
}

.competency-backdrop {
  position: absolute;
  inset: 0;
  background: #ffedd5;
  border-radius: 1rem;
  transform: rotate(3deg);
  transition: transform var(--transition-normal);
}

.competency-stack:hover .competency-backdrop {
  transform: rotate(6deg);
}

.competency-panel {
  position: relative;
  background: var(--panel-dark);
  color: #ffffff;
  padding: 2rem;
  border-radius: 1rem;
  box-shadow: 0 20px 25px -5px rgba(15, 23, 42, 0.25);
  transition: transform var(--transition-normal);
}

.competency-stack:hover .competency-panel {
  transform: translateY(-0.5rem);
}

.competency-heading {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-xl);
  font-weight: 700;
  margin-bottom: 1rem;
  color: #ffffff;
}

.competency-heading svg {
  color: var(--amber);
}

.competency-list {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.competency-list li {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.competency-dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 50%;
  background: var(--amber);
  flex-shrink: 0;
}

.about-heading {
  font-size: var(--text-2xl);
  font-weight: 700;
  color: var(--ink);
  margin-bottom: 1.5rem;
}

.about-heading-accent {
  color: var(--link-blue);
}

.about-text {
  color: var(--text-secondary);
  line-height: 1.7;
  margin-bottom: 1.5rem;
}

.trait-tags {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding-top: 1rem;
}

.trait-tag {
  padding: 0.5rem 1rem;
  background: #f1f5f9;
  border-radius: 0.25rem;
  color: var(--text-secondary);
  font-weight: 600;
  font-size: var(--text-sm);
}

/* === Section Title === */
.section-title h2 {
  font-size: var(--text-2xl);
  font-weight: 700;
  color: var(--ink);
}

.section-rule {
  width: 4rem;
  height: 0.25rem;
  background: var(--amber);
  margin-top: 1rem;
}

.section-title.centered {
  text-align: center;
  margin-bottom: 4rem;
}

.section-title.centered .section-rule {
  margin-left: auto;
  margin-right: auto;
}

/* === Experience Timeline === */
.experience {
  padding: 5rem 0;
  background: var(--paper);
}

.timeline {
  max-width: 56rem;
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.timeline-entry {
  position: relative;
  padding-left: 2rem;
}

.timeline-line {
  display: none;
}

.timeline-row {
  position: relative;
}

.timeline-period {
  display: none;
}

.timeline-node {
  position: absolute;
  left: -2rem;
  top: 1.5rem;
  width: 2rem;
  height: 2rem;
  border-radius: 50%;
  background: var(--card);
  border: 4px solid var(--rail-blue);
  color: #60a5fa;
  box-shadow: 0 4px 6px -1px rgba(15, 23, 42, 0.15);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 10;
  transition: transform var(--transition-normal);
}

.timeline-node.current {
  background: var(--link-blue);
  border-color: var(--card);
  color: #ffffff;
}

.timeline-row:hover .timeline-node {
  transform: scale(1.1);
}

.timeline-card {
  background: var(--card);
  padding: 1.5rem;
  border-radius: 0.5rem;
  border-left: 4px solid var(--link-blue);
  box-shadow: 0 4px 6px -1px rgba(15, 23, 42, 0.1);
  transition: box-shadow var(--transition-normal);
}

.timeline-row.flipped .timeline-card {
  border-left-color: var(--amber);
}

.timeline-card:hover {
  box-shadow: 0 20px 25px -5px rgba(15, 23, 42, 0.15);
}

.job-role {
  font-size: var(--text-lg);
  font-weight: 700;
  color: var(--ink);
}

.job-company {
  color: var(--link-blue);
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.job-period-inline {
  font-size: var(--text-sm);
  color: var(--text-muted);
  margin-bottom: 1rem;
}

.job-highlights {
  list-style: disc;
  padding-left: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

/* === Skills & Credentials === */
.skills {
  padding: 5rem 0;
  background: var(--card);
}

.skills-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 3rem;
}

.skills-heading {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-xl);
  font-weight: 700;
  color: var(--ink);
  margin-bottom: 1.5rem;
}

.skills-heading-icon {
  display: inline-flex;
}

.skills-heading-icon.blue {
  color: var(--link-blue);
}

.skills-heading-icon.amber {
  color: var(--amber);
}

.skill-list {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.skill-bar-head {
  display: flex;
  justify-content: space-between;
  margin-bottom: 0.25rem;
}

.skill-name {
  font-weight: 600;
  color: var(--text-secondary);
}

.skill-percent {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.skill-track {
  width: 100%;
  height: 0.625rem;
  background: #f1f5f9;
  border-radius: 9999px;
  overflow: hidden;
}

.skill-fill {
  height: 100%;
  border-radius: 9999px;
  background: linear-gradient(to right, var(--link-blue), #60a5fa);
  transition: width 1s ease-out;
}

.credential-list {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.credential-card {
  background: var(--paper);
  border: 1px solid #f1f5f9;
  border-radius: 0.5rem;
  padding: 1rem;
  display: flex;
  gap: 1rem;
  align-items: flex-start;
  transition: background var(--transition-fast);
}

.credential-card:hover {
  background: #f1f5f9;
}

.credential-seal {
  background: var(--card);
  padding: 0.5rem;
  border-radius: 0.25rem;
  box-shadow: 0 1px 2px rgba(15, 23, 42, 0.08);
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.25rem;
}

.credential-logo {
  width: 2.5rem;
  height: 2.5rem;
  object-fit: contain;
}

.credential-glyph {
  display: inline-flex;
  color: var(--amber);
}

.credential-copy h4 {
  font-weight: 700;
  color: var(--ink);
}

.credential-copy p {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.badge-row {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-top: 0.5rem;
}

.badge-pill {
  padding: 0.25rem 0.75rem;
  background: #dbeafe;
  color: #1d4ed8;
  border-radius: 9999px;
  font-size: var(--text-xs);
  font-weight: 600;
  transition: background var(--transition-fast);
}

.badge-pill:hover {
  background: #bfdbfe;
}

/* === Contact Footer === */
.contact {
  background: var(--ink);
  color: #cbd5e1;
  padding: 4rem 0;
}

.contact-inner {
  text-align: center;
}

.contact-heading {
  font-size: var(--text-2xl);
  font-weight: 700;
  color: #ffffff;
  margin-bottom: 2rem;
}

.contact-cards {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1.5rem;
  margin-bottom: 3rem;
}

.contact-card {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  background: var(--panel-dark);
  border: 1px solid #334155;
  border-radius: 0.5rem;
  padding: 1rem 1.5rem;
  text-align: left;
  transition: background var(--transition-fast);
}

.contact-card:hover {
  background: #334155;
}

.contact-card-icon {
  display: inline-flex;
  color: var(--amber);
  transition: transform var(--transition-fast);
}

.contact-card:hover .contact-card-icon {
  transform: scale(1.1);
}

.contact-card-caption {
  font-size: var(--text-xs);
  color: #94a3b8;
}

.contact-card-value {
  color: #ffffff;
  font-weight: 500;
}

.footer-row {
  border-top: 1px solid var(--panel-dark);
  padding-top: 2rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.footer-location {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
}

/* === Reveal-on-Scroll === */
.reveal {
  opacity: 0;
  transform: translateY(30px);
  transition: all var(--transition-reveal);
}

.reveal.active {
  opacity: 1;
  transform: translateY(0);
}

.reveal-left {
  transform: translateX(-30px);
}

.reveal-right {
  transform: translateX(30px);
}

.reveal.active.reveal-left,
.reveal.active.reveal-right {
  transform: translate(0);
}

.reveal-delay-100 { transition-delay: 0.1s; }
.reveal-delay-200 { transition-delay: 0.2s; }
.reveal-delay-300 { transition-delay: 0.3s; }

/* === Desktop (>= 768px) === */
@media (min-width: 768px) {
  .nav-links {
    display: flex;
  }

  .menu-toggle,
  .mobile-menu {
    display: none;
  }

  .brand-name {
    color: #ffffff;
  }

  .navbar.scrolled .brand-name {
    color: var(--ink);
  }

  .hero-title {
    font-size: 3.75rem;
  }

  .hero-lead {
    font-size: var(--text-xl);
  }

  .hero-actions {
    flex-direction: row;
  }

  .stat-grid {
    grid-template-columns: repeat(4, 1fr);
  }

  .about-grid {
    flex-direction: row;
    align-items: center;
  }

  .about-col {
    width: 50%;
  }

  .skills-grid {
    grid-template-columns: repeat(2, 1fr);
  }

  .timeline-entry {
    padding-left: 0;
  }

  .timeline-line {
    display: block;
    position: absolute;
    left: 50%;
    top: 0;
    bottom: 0;
    width: 2px;
    background: var(--rail-blue);
    transform: translateX(-50%);
  }

  .timeline-row {
    display: flex;
    align-items: center;
    justify-content: space-between;
  }

  .timeline-row.flipped {
    flex-direction: row-reverse;
  }

  .timeline-period {
    display: block;
    width: 41%;
    text-align: right;
    padding-right: 2rem;
    color: var(--amber-deep);
    font-weight: 700;
    letter-spacing: 0.025em;
  }

  .timeline-row.flipped .timeline-period {
    text-align: left;
    padding-right: 0;
    padding-left: 2rem;
    color: var(--text-muted);
  }

  .timeline-node {
    left: 50%;
    top: auto;
    transform: translateX(-50%);
  }

  .timeline-row:hover .timeline-node {
    transform: translateX(-50%) scale(1.1);
  }

  .timeline-card-slot {
    width: 41%;
  }

  .job-period-inline {
    display: none;
  }
}
"#;
