// src/layout/assets.rs
// Inline stylesheet and client-side behavior for the rendered guide.
// Column width comes in through `--channel-width` and the per-grid
// `width` style; the listing offset and search URL through `data-*` on <body>.

pub const FONT_URL: &str = "https://fonts.googleapis.com/css2?family=Roboto:wght@400;500&display=swap";

pub const CSS: &str = r#"
:root { --header-height: 60px; --timeline-header-height: 40px; --time-col-width: 60px; --hour-height: 80px; }
html, body { height: 100%; margin: 0; overflow: hidden; font-family: 'Roboto', sans-serif; background-color: #f1f3f4; }
.page-header { height: var(--header-height); box-sizing: border-box; padding: 5px 0; display: flex; flex-direction: column; align-items: center; justify-content: center; background-color: #fff; border-bottom: 1px solid #ddd; }
.page-header h1 { margin: 0 0 5px 0; font-size: 1.2em; }
.date-switcher button { margin: 0 5px; padding: 5px 12px; font-size: 0.9em; border: 1px solid #ccc; border-radius: 5px; background-color: #fff; cursor: pointer; }
.date-switcher button.active { background-color: #1a73e8; border-color: #1a73e8; color: #fff; }
.timeline-container { display: grid; grid-template-columns: var(--time-col-width) 1fr; grid-template-rows: var(--timeline-header-height) 1fr; height: calc(100vh - var(--header-height)); }
.corner-block { grid-column: 1; grid-row: 1; background-color: #fff; border-right: 1px solid #ddd; border-bottom: 1px solid #ddd; }
.channels-header-wrapper { grid-column: 2; grid-row: 1; overflow: hidden; background-color: #fff; border-bottom: 1px solid #ddd; }
.channels-header-content { display: flex; }
.channel-header { flex: 0 0 var(--channel-width); box-sizing: border-box; padding: 10px 5px; text-align: center; font-weight: 500; border-left: 1px solid #ddd; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
.time-markers { grid-column: 1; grid-row: 2; overflow-y: hidden; text-align: right; font-size: 0.8em; color: #5f6368; background-color: #fff; border-right: 1px solid #ddd; }
.time-marker { position: relative; height: var(--hour-height); box-sizing: border-box; padding-right: 5px; }
.time-marker span { position: relative; top: -0.6em; }
.schedule-scroll-pane { grid-column: 2; grid-row: 2; overflow: auto; }
.schedule-grid { position: relative; height: calc(var(--hour-height) * 24);
    background-image: linear-gradient(#e0e0e0 1px, transparent 1px), linear-gradient(to right, #e0e0e0 1px, transparent 1px);
    background-size: 100% var(--hour-height), var(--channel-width) 100%; }
.program-block { position: absolute; box-sizing: border-box; display: flex; flex-direction: column; padding: 4px; overflow: hidden; border: 1px solid; border-radius: 4px; color: #fff; font-size: 0.8em; cursor: pointer; transition: filter 0.15s ease-in-out; }
.program-block:hover { z-index: 10; filter: brightness(115%); }
.program-title { font-weight: 500; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
.program-time { font-size: 0.9em; opacity: 0.8; white-space: nowrap; }
.time-indicator { position: absolute; left: 0; z-index: 20; display: none; width: 100%; height: 2px; background-color: #ea4335; pointer-events: none; }
.time-indicator::before { content: ''; position: absolute; left: -5px; top: -4px; display: block; width: 10px; height: 10px; border-radius: 50%; background-color: #ea4335; }
#tooltip { position: fixed; z-index: 100; display: none; max-width: 300px; padding: 10px 15px; border-radius: 6px; background: rgba(0, 0, 0, 0.85); color: #fff; font-size: 0.9em; pointer-events: none; }
.hidden { display: none; }
"#;

pub const SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', () => {
    const body = document.body;
    const offsetMinutes = Number(body.dataset.utcOffsetMinutes || 0);
    const searchUrl = body.dataset.searchUrl || '';
    const pane = document.querySelector('.schedule-scroll-pane');
    const ruler = document.querySelector('.time-markers');
    const header = document.querySelector('.channels-header-wrapper');
    const grids = { today: document.getElementById('todayGrid'), tomorrow: document.getElementById('tomorrowGrid') };
    const buttons = { today: document.getElementById('todayBtn'), tomorrow: document.getElementById('tomorrowBtn') };
    const tooltip = document.getElementById('tooltip');
    const nowLine = grids.today.querySelector('.time-indicator');

    pane.addEventListener('scroll', () => {
        header.scrollLeft = pane.scrollLeft;
        ruler.scrollTop = pane.scrollTop;
    });

    // Minutes since local midnight at the listing's fixed offset.
    function listingMinutes() {
        const shifted = new Date(Date.now() + offsetMinutes * 60000);
        return shifted.getUTCHours() * 60 + shifted.getUTCMinutes();
    }

    function fitLabels(grid) {
        grid.querySelectorAll('.program-block').forEach(block => {
            const time = block.querySelector('.program-time');
            if (time) time.style.display = block.offsetHeight < 35 ? 'none' : 'block';
        });
    }

    function placeNowLine() {
        if (!nowLine || grids.today.classList.contains('hidden')) return;
        nowLine.style.top = (listingMinutes() / 1440 * 100) + '%';
        nowLine.style.display = 'block';
    }

    function show(day) {
        for (const key of Object.keys(grids)) {
            grids[key].classList.toggle('hidden', key !== day);
            buttons[key].classList.toggle('active', key === day);
        }
        fitLabels(grids[day]);
        if (day === 'today') placeNowLine();
    }

    function scrollToNow() {
        const y = listingMinutes() / 1440 * pane.scrollHeight;
        pane.scrollTo({ top: Math.max(0, y - pane.clientHeight / 3), behavior: 'smooth' });
    }

    buttons.today.addEventListener('click', () => show('today'));
    buttons.tomorrow.addEventListener('click', () => show('tomorrow'));

    document.querySelectorAll('.program-block').forEach(block => {
        block.addEventListener('mousemove', e => {
            tooltip.textContent = block.dataset.description;
            tooltip.style.left = (e.clientX + 15) + 'px';
            tooltip.style.top = (e.clientY + 15) + 'px';
            tooltip.style.display = 'block';
        });
        block.addEventListener('mouseleave', () => { tooltip.style.display = 'none'; });
        block.addEventListener('click', () => {
            const title = block.querySelector('.program-title');
            if (title && searchUrl) window.open(searchUrl + encodeURIComponent(title.textContent), '_blank');
        });
    });

    show('today');
    scrollToNow();
    setInterval(placeNowLine, 60000);
});
"#;
