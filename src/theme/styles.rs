//! Global CSS styles for the Meraki studio site.
//!
//! Warm ivory ground, charcoal type, serif display faces. Reveal states are
//! pure CSS: a block renders hidden until its section adds `is-visible`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Ground */
  --ivory: #f9f7f2;
  --paper: #ffffff;
  --night: #0a0a0a;

  /* Ink */
  --ink: #000000;
  --ink-body: #4a4a4a;
  --ink-muted: rgba(0, 0, 0, 0.5);
  --ink-faint: rgba(0, 0, 0, 0.3);
  --hairline: rgba(0, 0, 0, 0.05);

  /* Typography */
  --font-serif: 'Cormorant Garamond', 'Playfair Display', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  /* Transitions */
  --ease-out: cubic-bezier(0.22, 1, 0.36, 1);
  --reveal-duration: 2s;
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
}

body {
  font-family: var(--font-sans);
  background: var(--ivory);
  color: var(--ink);
  line-height: 1.6;
  min-height: 100vh;
}

::selection {
  background: var(--ink);
  color: var(--paper);
}

a {
  color: inherit;
  text-decoration: none;
}

img, video {
  display: block;
  max-width: 100%;
}

/* === Layout === */
.section {
  padding: 6rem 2rem;
  background: var(--ivory);
  overflow: hidden;
}

.section-inner {
  max-width: 1536px;
  margin: 0 auto;
}

.section-inner.layered {
  position: relative;
  z-index: 1;
}

.section-header {
  max-width: 42rem;
  margin-bottom: 5rem;
}

.section-header.centered {
  margin-left: auto;
  margin-right: auto;
  text-align: center;
}

.contact, .process {
  border-top: 1px solid var(--hairline);
}

/* === Typography === */
.eyebrow {
  display: inline-block;
  font-size: 0.625rem;
  text-transform: uppercase;
  letter-spacing: 0.4em;
  color: var(--ink-muted);
  margin-bottom: 1.5rem;
}

.eyebrow.wide-tracking {
  letter-spacing: 0.5em;
}

.section-title {
  font-family: var(--font-serif);
  font-weight: 400;
  font-size: 2.25rem;
  line-height: 1.2;
  margin-bottom: 2rem;
}

.section-title.large {
  letter-spacing: -0.01em;
}

.section-lede, .body-text {
  color: var(--ink-body);
  font-weight: 300;
  font-size: 1rem;
  max-width: 32rem;
}

.section-lede.soft {
  opacity: 0.8;
}

.section-header.centered .section-lede {
  margin: 0 auto;
}

.body-text + .body-text {
  margin-top: 1.5rem;
}

.card-title {
  font-family: var(--font-serif);
  font-weight: 400;
  font-size: 1.25rem;
  margin-bottom: 1rem;
  letter-spacing: 0.02em;
}

.card-text {
  color: var(--ink-body);
  font-weight: 300;
  font-size: 0.875rem;
  line-height: 1.7;
  max-width: 20rem;
}

.card-text.narrow {
  max-width: 15rem;
}

.wide-only {
  display: none;
}

/* === Buttons & links === */
.btn-solid {
  display: inline-block;
  padding: 1rem 2.5rem;
  background: var(--paper);
  color: var(--ink);
  border: none;
  font-size: 0.6875rem;
  text-transform: uppercase;
  letter-spacing: 0.25em;
  cursor: pointer;
  transition: background 0.5s ease, color 0.5s ease, transform 0.7s ease;
}

.btn-solid:hover {
  background: var(--ink);
  color: var(--paper);
}

.btn-solid.dark {
  padding: 1rem 3rem;
  background: var(--ink);
  color: var(--paper);
}

.btn-solid.dark:hover {
  background: rgba(0, 0, 0, 0.9);
  transform: scale(1.05);
}

.btn-underline {
  position: relative;
  display: inline-block;
  padding: 0.5rem 0;
  font-size: 0.6875rem;
  text-transform: uppercase;
  letter-spacing: 0.25em;
}

.btn-underline::after {
  content: "";
  position: absolute;
  bottom: 0;
  left: 0;
  width: 2rem;
  height: 1px;
  background: currentColor;
  transition: width 0.5s ease;
}

.btn-underline:hover::after {
  width: 100%;
}

/* === Reveal states === */
.reveal {
  opacity: 0;
  transition-property: opacity, transform, width, background-color;
  transition-duration: var(--reveal-duration);
  transition-timing-function: ease-out;
}

.reveal.is-visible {
  opacity: 1;
  transform: none;
}

.reveal-fade { transform: none; }
.reveal-rise { transform: translateY(2.5rem); }
.reveal-from-left { transform: translateX(-2.5rem); }
.reveal-from-right { transform: translateX(8rem); }
.reveal-zoom { transform: scale(0.95); }
.reveal-float {
  transform: translateY(8rem) scale(0.95) rotate(1deg);
  transition-duration: 2.5s;
  transition-timing-function: var(--ease-out);
}

.slow { --reveal-duration: 2s; }
.slower { --reveal-duration: 2.5s; }

.delay-100 { animation-delay: 100ms; transition-delay: 100ms; }
.delay-200 { animation-delay: 200ms; transition-delay: 200ms; }
.delay-300 { animation-delay: 300ms; transition-delay: 300ms; }
.delay-400 { animation-delay: 400ms; transition-delay: 400ms; }
.delay-500 { transition-delay: 500ms; }
.delay-700 { transition-delay: 700ms; }
.delay-1500 { transition-delay: 1500ms; }

/* === Looping ambience === */
@keyframes breathe {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.82; }
}

@keyframes subtle-float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-6px); }
}

@keyframes number-pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.4; }
}

@keyframes slow-pan {
  0% { transform: scale(1.05) translateX(0); }
  50% { transform: scale(1.08) translateX(-1.5%); }
  100% { transform: scale(1.05) translateX(0); }
}

@keyframes fade-up {
  from { opacity: 0; transform: translateY(1.5rem); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes scale-in {
  from { opacity: 0; transform: scale(0.92); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes page-fade-in {
  to { opacity: 1; }
}

@keyframes scroll-slide {
  0% { transform: translateY(-100%); }
  100% { transform: translateY(100%); }
}

.breathe { animation: breathe 6s ease-in-out infinite; }
.float { animation: subtle-float 6s ease-in-out infinite; }
.pulse { animation: number-pulse 4s ease-in-out infinite; }
.slow-pan { animation: slow-pan 30s ease-in-out infinite; }
.fade-up { opacity: 0; animation: fade-up 1.6s var(--ease-out) forwards; }
.scale-in { opacity: 0; animation: scale-in 1.6s var(--ease-out) forwards; }

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  z-index: 50;
  padding: 1.5rem 2rem;
  background: transparent;
  color: var(--paper);
  transition: all 0.7s ease-in-out;
}

.navbar.scrolled {
  padding: 1rem 2rem;
  background: rgba(249, 247, 242, 0.95);
  backdrop-filter: blur(12px);
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
  color: var(--ink);
}

.navbar-inner {
  max-width: 1536px;
  margin: 0 auto;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.navbar-brand {
  font-family: var(--font-serif);
  font-size: 1.25rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
}

.navbar-brand-sub {
  font-weight: 300;
  font-style: italic;
  text-transform: lowercase;
}

.navbar-links {
  display: none;
  gap: 3rem;
}

.navbar-link {
  position: relative;
  font-size: 0.6875rem;
  font-weight: 500;
  text-transform: uppercase;
  letter-spacing: 0.25em;
}

.navbar-link-underline {
  position: absolute;
  bottom: -0.25rem;
  left: 0;
  width: 0;
  height: 1px;
  background: currentColor;
  transition: width 0.3s ease;
}

.navbar-link:hover .navbar-link-underline {
  width: 100%;
}

.navbar-menu {
  display: flex;
  flex-direction: column;
  gap: 0.375rem;
  padding: 0.5rem;
}

.navbar-menu-line {
  display: block;
  width: 1.5rem;
  height: 1px;
  background: currentColor;
}

.navbar-menu-line.short {
  width: 1rem;
  align-self: flex-end;
}

/* === Hero === */
.hero {
  position: relative;
  height: 100vh;
  width: 100%;
  overflow: hidden;
  background: var(--night);
}

.hero-media {
  position: absolute;
  inset: 0;
  user-select: none;
}

.hero-media-fade {
  position: absolute;
  inset: 0;
  opacity: 0;
  animation: page-fade-in 3s ease-out forwards;
}

.hero-video {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.hero-overlay {
  position: absolute;
  inset: 0;
  background: rgba(0, 0, 0, 0.4);
}

.hero-content {
  position: relative;
  z-index: 2;
  height: 100%;
  max-width: 1536px;
  margin: 0 auto;
  padding: 0 2rem;
  display: flex;
  flex-direction: column;
  justify-content: center;
  color: var(--paper);
  transition: opacity 0.3s ease;
}

.hero-copy {
  max-width: 56rem;
}

.hero-kicker {
  font-size: 0.625rem;
  font-weight: 300;
  text-transform: uppercase;
  letter-spacing: 0.4em;
  margin-bottom: 1.5rem;
}

.hero-title {
  font-family: var(--font-serif);
  font-weight: 400;
  font-size: 3rem;
  line-height: 1;
  letter-spacing: -0.02em;
  margin-bottom: 2rem;
}

.hero-title-sub {
  font-size: 2.25rem;
  font-style: italic;
  font-weight: 300;
  opacity: 0.9;
}

.hero-lede {
  font-size: 1rem;
  font-weight: 300;
  color: rgba(255, 255, 255, 0.8);
  max-width: 32rem;
  margin-bottom: 3rem;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 2.5rem;
}

.scroll-indicator {
  position: absolute;
  bottom: 3rem;
  left: 50%;
  transform: translateX(-50%);
  z-index: 2;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  color: var(--paper);
}

.scroll-indicator-label {
  font-size: 0.5625rem;
  text-transform: uppercase;
  letter-spacing: 0.4em;
  animation-duration: 4s;
}

.scroll-indicator-track, .cta-drop-track {
  position: relative;
  width: 1px;
  height: 5rem;
  background: rgba(255, 255, 255, 0.1);
  overflow: hidden;
}

.scroll-indicator-bar {
  position: absolute;
  inset: 0;
  background: rgba(255, 255, 255, 0.6);
  animation: scroll-slide 2.5s cubic-bezier(0.65, 0, 0.35, 1) infinite;
}

/* === About === */
.about-grid {
  max-width: 1536px;
  margin: 0 auto;
  display: grid;
  grid-template-columns: 1fr;
  gap: 4rem;
  align-items: center;
}

.about-copy { order: 2; }
.about-media { order: 1; }

.about-body { margin-top: 2rem; }
.about-cta { margin-top: 3rem; }

.about-frame {
  position: relative;
  aspect-ratio: 3 / 4;
  overflow: hidden;
  border-radius: 2px;
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.about-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.image-veil {
  position: absolute;
  inset: 0;
  background: rgba(0, 0, 0, 0.05);
  pointer-events: none;
  transition: background 0.7s ease;
}

.about-caption {
  margin-top: 1.5rem;
  display: flex;
  justify-content: flex-end;
  font-size: 0.5625rem;
  font-style: italic;
  font-weight: 300;
  text-transform: uppercase;
  letter-spacing: 0.4em;
  color: var(--ink-faint);
}

/* === Services === */
.services-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 4rem;
}

.service-card {
  display: flex;
  flex-direction: column;
  align-items: flex-start;
}

.service-image-frame {
  position: relative;
  width: 100%;
  aspect-ratio: 4 / 3;
  overflow: hidden;
  margin-bottom: 2rem;
  border-radius: 2px;
}

.service-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  filter: grayscale(20%);
  transition: filter 2s ease, transform 2s ease;
}

.service-card:hover .service-image {
  filter: grayscale(0);
  transform: scale(1.1);
}

.service-card:hover .image-veil {
  background: transparent;
}

.card-rule {
  margin-top: 1.5rem;
  width: 2rem;
  height: 1px;
  background: rgba(0, 0, 0, 0.2);
  transition: all 0.7s ease;
}

.service-card:hover .card-rule {
  width: 100%;
  background: rgba(0, 0, 0, 0.6);
}

/* === Projects === */
.projects-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 2rem;
}

.project-card {
  position: relative;
  overflow: hidden;
  cursor: pointer;
}

.project-card--large { aspect-ratio: 16 / 10; }
.project-card--medium { aspect-ratio: 4 / 5; }

.project-image {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform 4s ease;
}

.project-card:hover .project-image {
  transform: scale(1.1);
}

.project-shade {
  position: absolute;
  inset: 0;
  background: rgba(0, 0, 0, 0.1);
  transition: background 1s ease;
}

.project-card:hover .project-shade {
  background: rgba(0, 0, 0, 0.3);
}

.project-caption {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  justify-content: flex-end;
  padding: 2rem;
  opacity: 0;
  transform: translateY(2.5rem);
  transition: all 1s ease;
  color: var(--paper);
}

.project-card:hover .project-caption {
  opacity: 1;
  transform: translateY(0);
}

.project-location {
  font-size: 0.625rem;
  text-transform: uppercase;
  letter-spacing: 0.4em;
  color: rgba(255, 255, 255, 0.7);
  margin-bottom: 0.5rem;
}

.project-title {
  font-family: var(--font-serif);
  font-weight: 400;
  font-size: 1.5rem;
  letter-spacing: 0.03em;
}

/* === Process === */
.process-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 4rem;
}

.process-step {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: flex-start;
  transition-duration: 1.8s;
}

.process-number {
  display: block;
  font-family: var(--font-serif);
  font-size: 2.25rem;
  margin-bottom: 2rem;
  user-select: none;
}

.process-divider {
  display: none;
  position: absolute;
  top: 3rem;
  right: 0;
  width: 1px;
  height: 8rem;
  background: var(--hairline);
  transform: scaleY(0);
  opacity: 0;
  transition: all 2s ease 1s;
}

.process-divider.is-visible {
  transform: scaleY(1);
  opacity: 1;
}

/* === Testimonials === */
.testimonials {
  position: relative;
  padding-top: 8rem;
  padding-bottom: 8rem;
}

.testimonials-watermark {
  position: absolute;
  top: 5rem;
  right: -10%;
  font-family: var(--font-serif);
  font-size: 20vw;
  line-height: 1;
  text-transform: uppercase;
  letter-spacing: -0.05em;
  color: rgba(0, 0, 0, 0.01);
  user-select: none;
  pointer-events: none;
}

.title-rule {
  width: 0;
  height: 1px;
  margin-bottom: 2.5rem;
  background: rgba(0, 0, 0, 0.1);
  transition: all 2s ease 700ms;
}

.title-rule.is-visible {
  width: 12rem;
  background: rgba(0, 0, 0, 0.3);
}

.testimonials-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 2.5rem;
}

.testimonial-card {
  position: relative;
  overflow: hidden;
  padding: 2.5rem;
  background: var(--paper);
  border: 1px solid rgba(0, 0, 0, 0.02);
  box-shadow: 0 10px 40px rgba(0, 0, 0, 0.02);
}

.testimonial-card:hover {
  box-shadow: 0 20px 60px rgba(0, 0, 0, 0.04);
}

.testimonial-bloom {
  position: absolute;
  top: -2.5rem;
  right: -2.5rem;
  width: 8rem;
  height: 8rem;
  border-radius: 50%;
  background: var(--ivory);
  opacity: 0;
  transform: scale(0);
  transition: all 1s ease;
}

.testimonial-card:hover .testimonial-bloom {
  opacity: 1;
  transform: scale(1.5);
}

.testimonial-body {
  position: relative;
  z-index: 1;
}

.testimonial-mark {
  font-family: var(--font-serif);
  font-size: 3rem;
  line-height: 1;
  margin-bottom: 2rem;
  color: rgba(0, 0, 0, 0.05);
  user-select: none;
}

.testimonial-text {
  color: var(--ink-body);
  font-weight: 300;
  font-style: italic;
  font-size: 1.125rem;
  letter-spacing: 0.02em;
  line-height: 1.7;
  margin-bottom: 3rem;
}

.testimonial-author {
  display: flex;
  align-items: center;
  gap: 1.5rem;
}

.testimonial-rule {
  width: 2.5rem;
  height: 1px;
  background: rgba(0, 0, 0, 0.1);
  transition: all 0.7s ease;
}

.testimonial-card:hover .testimonial-rule {
  width: 4rem;
  background: var(--ink);
}

.testimonial-name {
  display: block;
  font-size: 0.75rem;
  font-weight: 500;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  margin-bottom: 0.25rem;
}

.testimonial-project {
  display: block;
  font-size: 0.5625rem;
  font-weight: 300;
  text-transform: uppercase;
  letter-spacing: 0.3em;
  color: var(--ink-faint);
}

.testimonial-float {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.testimonials-cta {
  margin-top: 6rem;
  display: flex;
  justify-content: center;
}

.cta-drop {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

.cta-drop-label {
  font-size: 0.625rem;
  text-transform: uppercase;
  letter-spacing: 0.4em;
  color: rgba(0, 0, 0, 0.4);
  transition: color 0.3s ease;
}

.cta-drop:hover .cta-drop-label {
  color: var(--ink);
}

.cta-drop-track {
  height: 3rem;
  background: rgba(0, 0, 0, 0.1);
  transition: height 0.7s ease;
}

.cta-drop:hover .cta-drop-track {
  height: 5rem;
}

.cta-drop .scroll-indicator-bar {
  background: rgba(0, 0, 0, 0.4);
  animation-duration: 2s;
}

/* === Contact === */
.contact-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 4rem;
}

.contact-details {
  display: flex;
  flex-direction: column;
  gap: 3rem;
}

.contact-list {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.contact-item {
  display: flex;
  flex-direction: column;
}

.contact-value {
  font-size: 1.125rem;
  font-weight: 300;
}

.contact-value.link {
  display: inline-block;
  transition: all 0.3s ease;
}

.contact-value.link:hover {
  color: rgba(0, 0, 0, 0.6);
  transform: translateX(0.25rem);
}

.inquiry-form {
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.field-row {
  display: grid;
  grid-template-columns: 1fr;
  gap: 2rem;
}

.field {
  display: flex;
  flex-direction: column;
  padding: 0.5rem 0;
  border-bottom: 1px solid rgba(0, 0, 0, 0.1);
  transition: border-color 0.7s ease;
}

.field:focus-within {
  border-color: var(--ink);
}

.field-label {
  font-size: 0.625rem;
  text-transform: uppercase;
  letter-spacing: 0.2em;
  color: rgba(0, 0, 0, 0.4);
  margin-bottom: 0.25rem;
}

.field-input {
  background: transparent;
  border: none;
  outline: none;
  padding: 0.25rem 0;
  font: inherit;
  font-weight: 300;
}

.form-actions {
  padding-top: 1.5rem;
}

/* === Footer === */
.site-footer {
  padding: 6rem 2rem 3rem;
  background: var(--ivory);
  border-top: 1px solid var(--hairline);
  transition-timing-function: ease-in-out;
}

.footer-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 4rem;
  margin-bottom: 6rem;
}

.footer-brand {
  max-width: 20rem;
}

.footer-wordmark {
  font-family: var(--font-serif);
  font-weight: 400;
  font-size: 1.25rem;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  margin-bottom: 1.5rem;
  color: rgba(0, 0, 0, 0.9);
}

.footer-wordmark-sub {
  display: block;
  margin-top: 0.25rem;
  font-size: 0.875rem;
  font-style: italic;
  font-weight: 300;
  text-transform: lowercase;
}

.footer-text {
  color: var(--ink-body);
  font-size: 0.875rem;
  font-weight: 300;
  opacity: 0.8;
}

.footer-column {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.footer-heading {
  font-size: 0.625rem;
  text-transform: uppercase;
  letter-spacing: 0.4em;
  color: rgba(0, 0, 0, 0.4);
  margin-bottom: 1rem;
}

.footer-link {
  width: max-content;
  font-size: 0.875rem;
  font-weight: 300;
  color: var(--ink-body);
  transition: color 0.7s ease;
}

.footer-link:hover {
  color: rgba(0, 0, 0, 0.7);
}

.footer-contact {
  display: flex;
  flex-direction: column;
  font-size: 0.875rem;
  font-weight: 300;
  color: var(--ink-body);
}

.footer-contact-label {
  font-size: 0.5625rem;
  text-transform: uppercase;
  letter-spacing: 0.2em;
  color: var(--ink-faint);
  margin-bottom: 0.25rem;
}

.footer-socials {
  display: flex;
  flex-wrap: wrap;
  gap: 2rem;
  margin-bottom: 4rem;
}

.footer-social {
  font-size: 0.625rem;
  text-transform: uppercase;
  letter-spacing: 0.3em;
  color: var(--ink-muted);
  transition: color 0.7s ease-in-out;
}

.footer-social:hover {
  color: rgba(0, 0, 0, 0.8);
}

.footer-bar {
  padding-top: 2.5rem;
  border-top: 1px solid rgba(0, 0, 0, 0.04);
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  text-align: center;
}

.footer-legal, .footer-motto {
  font-size: 0.625rem;
  text-transform: uppercase;
  letter-spacing: 0.25em;
  color: var(--ink-body);
}

.footer-legal { opacity: 0.5; }
.footer-motto { opacity: 0.3; font-style: italic; font-weight: 300; }

/* === Floating contact === */
.floating-contact {
  position: fixed;
  right: 2rem;
  bottom: 2rem;
  z-index: 60;
  display: flex;
  align-items: center;
  justify-content: center;
  width: 3.5rem;
  height: 3.5rem;
  border-radius: 50%;
  background: var(--ink);
  color: var(--paper);
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.15);
  transition: transform 0.5s ease, background 0.5s ease;
}

.floating-contact:hover {
  transform: scale(1.08);
  background: #25d366;
}

/* === Responsive === */
@media (min-width: 768px) {
  .section { padding: 10rem 4rem; }
  .section-header { margin-bottom: 8rem; }
  .section-title { font-size: 3rem; }
  .section-lede, .body-text { font-size: 1.125rem; }
  .card-title { font-size: 1.5rem; }
  .card-text { font-size: 1rem; }
  .wide-only { display: inline; }

  .navbar { padding: 2rem 4rem; }
  .navbar.scrolled { padding: 1rem 4rem; }
  .navbar-links { display: flex; }
  .navbar-menu { display: none; }

  .hero-content { padding: 0 4rem; }
  .hero-kicker { font-size: 0.75rem; }
  .hero-title { font-size: 6rem; }
  .hero-title-sub { font-size: 4.5rem; }
  .hero-lede { font-size: 1.25rem; }

  .about-frame { aspect-ratio: 4 / 5; }
  .services-grid { grid-template-columns: repeat(3, 1fr); }
  .projects-grid { grid-template-columns: repeat(2, 1fr); gap: 3rem; }
  .project-card--large { grid-column: 1 / -1; }
  .project-caption { padding: 3rem; }
  .project-title { font-size: 2.25rem; }
  .process-grid { grid-template-columns: repeat(2, 1fr); gap: 3rem; }
  .testimonials { padding-top: 12rem; padding-bottom: 12rem; }
  .testimonials-grid { grid-template-columns: repeat(2, 1fr); gap: 4rem; }
  .testimonial-card { padding: 3.5rem; }
  .testimonial-text { font-size: 1.25rem; }
  .field-row { grid-template-columns: repeat(2, 1fr); }
  .footer-grid { grid-template-columns: repeat(2, 1fr); }
  .footer-bar { flex-direction: row; justify-content: space-between; text-align: left; }
  .site-footer { padding: 6rem 4rem 3rem; }
}

@media (min-width: 1024px) {
  .section-title { font-size: 3.75rem; }
  .section-title.large { font-size: 4.5rem; }
  .hero-title { font-size: 10rem; }
  .hero-title-sub { font-size: 6rem; }
  .about-grid { grid-template-columns: repeat(2, 1fr); gap: 8rem; }
  .about-copy { order: 1; }
  .about-media { order: 2; }
  .project-card--large { aspect-ratio: 21 / 9; }
  .process-grid { grid-template-columns: repeat(4, 1fr); gap: 0; }
  .process-step:not(:last-child) { padding-right: 3rem; }
  .process-divider { display: block; }
  .contact-grid { grid-template-columns: repeat(2, 1fr); gap: 8rem; }
  .footer-grid { grid-template-columns: repeat(4, 1fr); gap: 2rem; }
}

@media (prefers-reduced-motion: reduce) {
  .breathe, .float, .pulse, .slow-pan, .scroll-indicator-bar { animation: none; }
}
"#;
