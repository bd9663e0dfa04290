/// Stylesheet served at `/assets/style.css` and written by the exporter.
pub const DEFAULT_STYLE: &str = r#"
:root {
  --fg: #111;
  --bg: #fff;
  --muted: #666;
  --line: #e5e5e5;
  --dark: #000;
}

html,
body {
  margin: 0;
  padding: 0;
  background: var(--bg);
  color: var(--fg);
  font: 14px/1.6 -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto,
        'Helvetica Neue', Arial, 'Noto Sans', sans-serif;
}

a { color: inherit; }

.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  height: 64px;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 24px;
  background: rgba(0, 0, 0, 0.8);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid #222;
}

.navbar a {
  color: #fff;
  text-decoration: none;
  letter-spacing: 0.08em;
}

.navbar .logo { font-size: 22px; font-weight: 700; }
.navbar .links a { margin-left: 24px; font-size: 13px; }

main { padding-top: 64px; }

.dark { background: var(--dark); color: #fff; }
.muted { color: var(--muted); }
.error { color: #c92a2a; }

.hero img { width: 100%; max-height: 600px; object-fit: cover; display: block; }
.brand { text-align: center; padding: 32px 16px; }
.brand .lead { max-width: 880px; margin: 0 auto; font-size: 18px; font-weight: 300; }

.tile {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 48px;
  align-items: center;
  padding: 80px 32px;
}
.tile img { width: 100%; border-radius: 8px; object-fit: cover; }

.contact { text-align: center; padding: 48px 16px; }

.weddings { text-align: center; padding: 64px 32px; border-top: 1px solid #444; }
.weddings img { width: 100%; max-width: 720px; margin: 0 auto 24px; display: block; border-radius: 8px; object-fit: cover; }
.weddings p { max-width: 720px; margin: 0 auto 24px; font-size: 18px; font-weight: 300; }
.button.outline-light { background: transparent; color: #fff; border: 1px solid #fff; border-radius: 999px; }

.button {
  display: inline-block;
  padding: 10px 24px;
  background: #000;
  color: #fff;
  text-decoration: none;
  border-radius: 6px;
}
.button.light { background: #fff; color: #000; }
.button.secondary { background: #e5e5e5; color: #222; }
.button.outline { background: #fff; color: #111; border: 1px solid var(--line); }
.button.outline.wishlisted { background: #fff5f5; color: #c92a2a; border-color: #ffc9c9; }
.button.block { display: block; text-align: center; margin: 16px 0 8px; }

.notice { text-align: center; padding: 120px 16px; }
.notice .huge { font-size: 64px; margin: 0; }
.empty { font-size: 18px; color: var(--muted); }

.spinner {
  width: 48px;
  height: 48px;
  margin: 0 auto 16px;
  border-radius: 50%;
  border-bottom: 2px solid #000;
  animation: spin 1s linear infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }

.filters {
  position: sticky;
  top: 64px;
  z-index: 40;
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  gap: 12px;
  padding: 16px 24px;
  background: #fff;
  border-bottom: 1px solid var(--line);
}
.menu { position: relative; }
.menu summary { cursor: pointer; border: 1px solid var(--line); padding: 6px 12px; border-radius: 6px; }
.menu-items {
  position: absolute;
  min-width: 200px;
  background: #fff;
  border: 1px solid var(--line);
  border-radius: 6px;
  padding: 4px 0;
}
.menu.right .menu-items { right: 0; }
.menu-items a { display: block; padding: 6px 12px; text-decoration: none; }
.menu-items a.active { background: #f1f1f1; }
.menu-heading { padding: 6px 12px; font-weight: 600; }
.active-filters { width: 100%; }
.chip { background: #f1f1f1; border-radius: 999px; padding: 2px 12px; margin-left: 8px; }
.chip a { margin-left: 6px; text-decoration: none; color: var(--muted); }

.grid { max-width: 1400px; margin: 0 auto; padding: 40px 24px; }
.row { display: grid; gap: 24px; margin-bottom: 32px; }
.cols-2 { grid-template-columns: repeat(2, 1fr); }
.cols-3 { grid-template-columns: repeat(3, 1fr); }
.cols-2.narrow { max-width: 1024px; margin-left: auto; margin-right: auto; }
.grid.desktop { display: none; }
@media (min-width: 1024px) {
  .grid.mobile { display: none; }
  .grid.desktop { display: block; }
}

.card {
  display: flex;
  flex-direction: column;
  overflow: hidden;
  border-radius: 8px;
  text-decoration: none;
  box-shadow: 0 8px 20px rgba(0, 0, 0, 0.12);
  transition: transform 0.3s;
}
.card:hover { transform: translateY(-8px); }
.card .media { position: relative; aspect-ratio: 2 / 3; overflow: hidden; }
.card .media img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; transition: opacity 0.5s; }
.card .media img.hover { opacity: 0; }
.card:hover .media img.hover { opacity: 1; }
.card:hover .media img.hover + img, .card:hover .media:has(img.hover) img.primary { opacity: 0; }
.card .placeholder, .main-image.placeholder {
  display: flex;
  align-items: center;
  justify-content: center;
  background: #e5e5e5;
  color: #999;
}
.card .cta { background: #000; color: #fff; text-align: center; padding: 12px; }
.card-footer { background: #fafafa; padding: 16px; }
.card-footer h3 { margin: 0 0 8px; font-size: 16px; }
.price { font-weight: 700; font-size: 18px; margin: 0; }
.price.big { font-size: 30px; }

.breadcrumb { max-width: 1200px; margin: 24px auto; padding: 0 24px; color: var(--muted); }
.breadcrumb span { margin: 0 6px; }
.detail {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 24px 48px;
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 48px;
}
.main-image { position: relative; max-width: 512px; margin: 0 auto; aspect-ratio: 3 / 4; overflow: hidden; border-radius: 8px; background: #f3f3f3; }
.main-image img { width: 100%; height: 100%; object-fit: cover; }
.arrow {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  background: rgba(255, 255, 255, 0.8);
  border-radius: 50%;
  width: 36px;
  height: 36px;
  text-align: center;
  line-height: 34px;
  font-size: 22px;
  text-decoration: none;
}
.arrow.prev { left: 16px; }
.arrow.next { right: 16px; }
.counter { position: absolute; bottom: 16px; right: 16px; background: rgba(0, 0, 0, 0.7); color: #fff; border-radius: 999px; padding: 2px 12px; }
.thumbs { position: relative; max-width: 512px; margin: 16px auto 0; }
.thumbs.paged .strip { padding: 0 32px; }
.strip { display: grid; gap: 8px; }
.thumb { display: block; aspect-ratio: 1; overflow: hidden; border-radius: 8px; outline: 1px solid var(--line); }
.thumb.current { outline: 2px solid #000; }
.thumb img { width: 100%; height: 100%; object-fit: cover; }
.page { position: absolute; top: 40%; z-index: 10; text-decoration: none; font-size: 20px; }
.page.prev { left: 0; }
.page.next { right: 0; }
.page.disabled { opacity: 0.5; cursor: not-allowed; }
.dots { display: flex; justify-content: center; gap: 4px; margin-top: 8px; }
.dot { width: 8px; height: 8px; border-radius: 50%; background: #ccc; }
.dot.active { background: #000; }
.category { text-transform: capitalize; color: var(--muted); }
.card.details { box-shadow: none; border: 1px solid var(--line); padding: 24px; margin-top: 24px; }
.kv { display: flex; justify-content: space-between; }
.available { color: #2b8a3e; }

@media (max-width: 1023px) {
  .tile, .detail { grid-template-columns: 1fr; }
}
"#;
