//! Static stylesheet and reveal runtime embedded into the page.
//!
//! Entrance uses the `translate` property and pointer feedback uses `scale`,
//! so both can transition independently with their own timing.

pub const STYLESHEET: &str = r#"
*,*::before,*::after{box-sizing:border-box}
html{scroll-behavior:smooth}
body{margin:0;font-family:system-ui,-apple-system,"Segoe UI",Roboto,sans-serif;color:#111;background:linear-gradient(135deg,#fff,#f3f4f6 50%,#e5e7eb)}
.site-header{position:sticky;top:0;z-index:50;display:flex;flex-wrap:wrap;gap:1.5rem;justify-content:space-between;align-items:center;padding:1.25rem 2rem;background:rgba(255,255,255,.8);backdrop-filter:blur(12px);box-shadow:0 10px 25px rgba(0,0,0,.08)}
.site-name{margin:0;font-size:1.75rem;letter-spacing:.05em;color:#f97316}
.site-nav{display:flex;flex-wrap:wrap;gap:1.5rem}
.site-nav a{position:relative;color:#1f2937;font-weight:600;text-decoration:none;transition:color .3s}
.site-nav a:hover{color:#f97316}
.site-nav a::after{content:"";position:absolute;left:0;bottom:-4px;width:0;height:2px;background:#fb923c;transition:width .3s}
.site-nav a:hover::after{width:100%}
.section{padding:4rem 2.5rem;scroll-margin-top:5rem}
.section-title{margin:0 0 2.5rem;text-align:center;font-size:2.25rem;color:#f97316}
.about{display:flex;flex-wrap:wrap;gap:2.5rem;align-items:center;justify-content:space-between;padding-top:5rem}
.about-text{flex:1 1 24rem}
.about-image{flex:1 1 16rem;display:flex;justify-content:center}
.about-image img{width:23rem;max-width:100%;aspect-ratio:1;object-fit:cover;border:4px solid #fb923c;border-radius:.5rem;box-shadow:0 20px 25px rgba(0,0,0,.15)}
.headline{margin:0 0 .5rem;font-weight:600;color:#f97316}
.greeting{margin:0 0 1rem;font-size:3rem;line-height:1.1}
.about-text p.bio{max-width:42rem;color:#374151;font-weight:600;line-height:1.7}
.links{display:flex;flex-wrap:wrap;gap:1rem;margin-top:1.5rem}
.links a{display:inline-flex;align-items:center;gap:.5rem;padding:.5rem 1rem;border-radius:.375rem;color:#fff;font-size:.875rem;font-weight:500;text-decoration:none;transition:background-color .2s}
.link-email{background:#d44638}.link-email:hover{background:#bb3b2f}
.link-profile{background:#0077b5}.link-profile:hover{background:#005e91}
.link-resume{background:#f97316}.link-resume:hover{background:#ea580c}
.grid{display:grid;gap:1.5rem}
.skills-grid{grid-template-columns:repeat(auto-fill,minmax(10rem,1fr));text-align:center}
.cards-grid{grid-template-columns:repeat(auto-fill,minmax(22rem,1fr))}
.stack{display:flex;flex-direction:column;gap:2rem}
.skill{padding:1rem;border-radius:.5rem;background:#f97316;color:#fff;font-weight:600;box-shadow:0 4px 6px rgba(0,0,0,.1)}
.skill:hover{background:#ea580c;box-shadow:0 10px 15px rgba(0,0,0,.15)}
.skill:focus-visible{outline:2px solid #5a87b2;outline-offset:2px}
.card{padding:1.5rem;border-radius:.5rem;background:#fff;box-shadow:0 4px 6px rgba(0,0,0,.1)}
.card:hover{box-shadow:0 10px 15px rgba(253,186,116,.6)}
.card h3{margin:0;font-size:1.25rem}
.muted{color:#6b7280}
.role{margin:.5rem 0 0;font-size:1.125rem;font-weight:600;color:#f97316}
.points{margin:1rem 0 0;padding-left:1.25rem;color:#374151;font-weight:600;line-height:1.6}
.site-footer{padding:2rem;text-align:center;font-size:.75rem;color:#6b7280}
.reveal{opacity:var(--hidden-opacity,0);translate:var(--reveal-x,0) var(--reveal-y,0);transition:opacity var(--reveal-duration,500ms) ease-out var(--reveal-delay,0ms),translate var(--reveal-duration,500ms) ease-out var(--reveal-delay,0ms),scale 200ms ease,background-color .3s,box-shadow .3s}
.reveal[data-state="visible"]{opacity:var(--visible-opacity,1);translate:0 0}
.reveal:hover{scale:var(--hover-scale,1)}
.reveal:hover:active,.reveal:active{scale:var(--press-scale,1)}
"#;

/// Shown instead of the runtime when scripting is off.
pub const NOSCRIPT_STYLE: &str = ".reveal{opacity:var(--visible-opacity,1);translate:0 0}";

/// Flips each hidden `.reveal` element's `data-state` to visible exactly once.
pub const REVEAL_SCRIPT: &str = r#"
(function () {
  var items = document.querySelectorAll('.reveal[data-state="hidden"]');
  var show = function (el) { el.dataset.state = 'visible'; };
  if (!('IntersectionObserver' in window)) {
    items.forEach(show);
    return;
  }
  var observer = new IntersectionObserver(function (entries) {
    entries.forEach(function (entry) {
      if (entry.isIntersecting) {
        show(entry.target);
        observer.unobserve(entry.target);
      }
    });
  });
  items.forEach(function (el) {
    if (el.dataset.reveal === 'mount') {
      requestAnimationFrame(function () { show(el); });
    } else {
      observer.observe(el);
    }
  });
})();
"#;

/// Inline SVG glyphs for the outbound links.
pub mod icons {
    pub const MAIL: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><rect x="2" y="4" width="20" height="16" rx="2"/><path d="m22 7-10 6L2 7"/></svg>"#;
    pub const PROFILE: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z"/><rect x="2" y="9" width="4" height="12"/><circle cx="4" cy="4" r="2"/></svg>"#;
    pub const DOWNLOAD: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/><path d="M14 2v6h6"/><path d="M12 18v-6"/><path d="m9 15 3 3 3-3"/></svg>"#;
}
