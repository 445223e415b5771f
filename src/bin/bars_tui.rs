//! buscar Bars Demo - Terminal User Interface
//!
//! A TUI visualization of linear and binary search using ratatui.
//! App logic lives in `buscar::tui::app`.

#![forbid(unsafe_code)]

#[cfg(feature = "tui")]
fn main() -> std::io::Result<()> {
    use buscar::config::VizConfig;
    use buscar::tui::SearchApp;

    let args: Vec<String> = std::env::args().collect();
    let config = if args.len() > 1 {
        match VizConfig::load(&args[1]) {
            Ok(config) => {
                eprintln!("Loaded: {} (seed {})", args[1], config.seed);
                config
            }
            Err(e) => {
                eprintln!("Error loading '{}': {e}", args[1]);
                eprintln!("Usage: bars-tui [path/to/config.yaml]");
                std::process::exit(1);
            }
        }
    } else {
        VizConfig::default()
    };

    let app = match SearchApp::new(config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    tui::run(app)
}

#[cfg(not(feature = "tui"))]
fn main() {
    eprintln!("TUI feature not enabled. Run with: cargo run --bin bars-tui --features tui");
    std::process::exit(1);
}

#[cfg(feature = "tui")]
mod tui {
    use buscar::bars::BarState;
    use buscar::tui::SearchApp;
    use crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{
        backend::CrosstermBackend,
        layout::{Constraint, Direction, Layout, Rect},
        style::{Color, Modifier, Style},
        text::{Line, Span},
        widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
        Frame, Terminal,
    };
    use std::io;
    use std::time::{Duration, Instant};

    pub fn run(mut app: SearchApp) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, crossterm::cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        // tick rate doubles as the pacing interval; floor keeps input snappy
        let tick_rate = Duration::from_millis(app.config.pacing_ms.max(50));
        let result = run_main_loop(&mut terminal, &mut app, tick_rate);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            crossterm::cursor::Show
        )?;

        result
    }

    fn run_main_loop(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        app: &mut SearchApp,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|f| ui(f, app))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code);
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                app.tick();
                last_tick = Instant::now();
            }

            if app.should_quit() {
                return Ok(());
            }
        }
    }

    fn bar_color(state: &BarState) -> Color {
        if state.found {
            Color::Green
        } else if state.active {
            Color::Yellow
        } else if state.checked.is_some() {
            Color::DarkGray
        } else {
            Color::Cyan
        }
    }

    fn ui(f: &mut Frame, app: &SearchApp) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(8),
                Constraint::Length(3),
            ])
            .split(f.area());

        draw_header(f, app, chunks[0]);
        draw_chart(f, app, chunks[1]);
        draw_trace(f, app, chunks[2]);
        draw_footer(f, app, chunks[3]);
    }

    fn draw_header(f: &mut Frame, app: &SearchApp, area: Rect) {
        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                "buscar",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "  target: {}  seed: {}  frame: {}",
                app.target,
                app.seed(),
                app.frame_count
            )),
        ]))
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(header, area);
    }

    fn draw_chart(f: &mut Frame, app: &SearchApp, area: Rect) {
        let values = app.session.values();
        let states = app.session.bars();

        let bars: Vec<Bar> = values
            .iter()
            .zip(states)
            .map(|(&value, state)| {
                Bar::default()
                    .value(value.max(0.0).round() as u64)
                    .label(Line::from(format!("{value}")))
                    .style(Style::default().fg(bar_color(state)))
            })
            .collect();

        let width = buscar::bars::BarChart::bar_width(area.width.saturating_sub(2), values.len().max(1));

        let chart = BarChart::default()
            .data(BarGroup::default().bars(&bars))
            .bar_width(width.max(1))
            .bar_gap(1)
            .block(Block::default().borders(Borders::ALL).title("array"));
        f.render_widget(chart, area);
    }

    fn draw_trace(f: &mut Frame, app: &SearchApp, area: Rect) {
        let visible = area.height.saturating_sub(2) as usize;
        let records = app.session.trace().records();
        let tail = records.len().saturating_sub(visible);
        let lines: Vec<Line> = records[tail..]
            .iter()
            .map(|r| Line::from(r.to_string()))
            .collect();

        let trace = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("iterations"));
        f.render_widget(trace, area);
    }

    fn draw_footer(f: &mut Frame, app: &SearchApp, area: Rect) {
        let complexity = app
            .session
            .last_outcome()
            .map(|o| format!("  |  {}", o.complexity));
        let footer = Paragraph::new(Line::from(vec![
            Span::styled(
                "[l]inear [b]inary [r]egenerate [space] pause [s]tep [+/-] target [q]uit",
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(format!(
                "  |  {}{}",
                app.status_line,
                complexity.unwrap_or_default()
            )),
        ]))
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(footer, area);
    }
}
