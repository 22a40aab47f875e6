//! The interactive menu loop.
//!
//! [`Shell`] reads commands and numbers line by line from any `BufRead` and
//! writes to any `Write`, so the whole loop can be driven from tests.

use std::io::{self, BufRead, Write};

use crossterm::style::{Color, Stylize};
use gridroute_core::{CellType, Endpoint, Grid, GridError, TerrainGen, TerrainMix};
use gridroute_paths::{RouteCoordinator, RouteReport};
use rand::rngs::StdRng;

const MENU: &[(&str, &str)] = &[
    ("1", "Create custom map"),
    ("2", "Use default map (10x10)"),
    ("3", "Set origin"),
    ("4", "Set target"),
    ("5", "Place obstacle"),
    ("6", "Clear cell"),
    ("7", "Show map"),
    ("8", "Compute route"),
    ("9", "Scatter random terrain"),
    ("0", "Quit"),
];

/// Whether the loop should keep going.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell<R, W> {
    input: R,
    out: W,
    grid: Option<Grid>,
    coordinator: RouteCoordinator,
    terrain: TerrainGen<StdRng>,
    color: bool,
    eof: bool,
    startup_error: Option<GridError>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(
        input: R,
        out: W,
        grid: Option<Grid>,
        coordinator: RouteCoordinator,
        rng: StdRng,
        color: bool,
    ) -> Self {
        Self {
            input,
            out,
            grid,
            coordinator,
            terrain: TerrainGen::new(rng),
            color,
            eof: false,
            startup_error: None,
        }
    }

    /// Report a problem with the starting map once the loop starts.
    pub fn with_startup_error(mut self, err: Option<GridError>) -> Self {
        self.startup_error = err;
        self
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        let title = self.paint("=== GRID ROUTE CALCULATOR ===", Color::Cyan);
        writeln!(self.out, "{title}")?;
        if let Some(err) = self.startup_error.take() {
            self.error(&err.to_string())?;
        }
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line("Choose an option: ")? else {
                break;
            };
            if self.dispatch(choice.trim())? == Flow::Quit || self.eof {
                break;
            }
        }
        writeln!(self.out, "Bye.")?;
        self.out.flush()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        for (key, label) in MENU {
            writeln!(self.out, "{key}. {label}")?;
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: &str) -> io::Result<Flow> {
        match choice {
            "1" => self.create_custom()?,
            "2" => self.install_grid(Grid::default(), None)?,
            "3" => self.set_endpoint(Endpoint::Origin)?,
            "4" => self.set_endpoint(Endpoint::Target)?,
            "5" => self.place_obstacle()?,
            "6" => self.clear_cell()?,
            "7" => self.show_map()?,
            "8" => self.compute_route()?,
            "9" => self.scatter()?,
            "0" => return Ok(Flow::Quit),
            other => {
                let msg = format!("invalid option {other:?}, try again");
                self.error(&msg)?;
            }
        }
        Ok(Flow::Continue)
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    fn create_custom(&mut self) -> io::Result<()> {
        let Some(rows) = self.read_int("Rows: ")? else {
            return Ok(());
        };
        let Some(cols) = self.read_int("Columns: ")? else {
            return Ok(());
        };
        let (grid, fallback) = Grid::new_or_default(rows, cols);
        self.install_grid(grid, fallback)
    }

    fn install_grid(&mut self, grid: Grid, fallback: Option<GridError>) -> io::Result<()> {
        if let Some(err) = fallback {
            self.error(&err.to_string())?;
        }
        let msg = format!("{}x{} map created.", grid.height(), grid.width());
        self.grid = Some(grid);
        self.success(&msg)
    }

    fn set_endpoint(&mut self, which: Endpoint) -> io::Result<()> {
        if !self.require_grid()? {
            return Ok(());
        }
        let (what, row_label, col_label) = match which {
            Endpoint::Origin => ("Origin", "Origin row: ", "Origin column: "),
            Endpoint::Target => ("Target", "Target row: ", "Target column: "),
        };
        let Some(row) = self.read_int(row_label)? else {
            return Ok(());
        };
        let Some(col) = self.read_int(col_label)? else {
            return Ok(());
        };
        let result = self.with_grid(|g| {
            let set = match which {
                Endpoint::Origin => g.set_origin(row, col),
                Endpoint::Target => g.set_target(row, col),
            };
            set.map(|()| g.endpoint(which))
        });
        match result {
            Some(Ok(Some(at))) => self.success(&format!("{what} set at {at}.")),
            Some(Ok(None)) => Ok(()),
            Some(Err(err)) => self.error(&err.to_string()),
            None => self.error("create a map first"),
        }
    }

    fn place_obstacle(&mut self) -> io::Result<()> {
        if !self.require_grid()? {
            return Ok(());
        }
        writeln!(self.out, "Types: 1=building, 2=water, 3=blocked")?;
        let Some(selector) = self.read_int("Type: ")? else {
            return Ok(());
        };
        let kind = match CellType::from_selector(selector) {
            Ok(kind) => kind,
            Err(err) => return self.error(&err.to_string()),
        };
        let Some(row) = self.read_int("Row: ")? else {
            return Ok(());
        };
        let Some(col) = self.read_int("Column: ")? else {
            return Ok(());
        };
        let result = self.with_grid(|g| g.place_obstacle(kind, row, col));
        self.report(result, &format!("{kind} placed at ({row}, {col})."))
    }

    fn clear_cell(&mut self) -> io::Result<()> {
        if !self.require_grid()? {
            return Ok(());
        }
        let Some(row) = self.read_int("Row: ")? else {
            return Ok(());
        };
        let Some(col) = self.read_int("Column: ")? else {
            return Ok(());
        };
        let result = self.with_grid(|g| g.clear_cell(row, col));
        self.report(result, &format!("Cell ({row}, {col}) cleared."))
    }

    fn show_map(&mut self) -> io::Result<()> {
        let Some(grid) = &self.grid else {
            return self.error("create a map first");
        };
        let text = grid.render(None, self.coordinator.glyphs());
        writeln!(self.out, "\nCurrent map:\n{text}")
    }

    fn compute_route(&mut self) -> io::Result<()> {
        let Some(grid) = &self.grid else {
            return self.error("create a map first");
        };
        let report = self.coordinator.compute_and_describe(grid);
        log::debug!("search stats: {:?}", self.coordinator.engine().last_stats());
        match report {
            RouteReport::Found { path, rendered } => {
                let head = format!("Route found with total cost {}:", path.total_cost());
                let head = self.paint(&head, Color::Green);
                writeln!(self.out, "\n{head}\n{rendered}")?;
                writeln!(self.out, "{path}")
            }
            RouteReport::NoRoute { reason } => self.error(&format!("no route found: {reason}")),
        }
    }

    fn scatter(&mut self) -> io::Result<()> {
        let Some(grid) = self.grid.as_mut() else {
            return self.error("create a map first");
        };
        let placed = self.terrain.scatter(grid, &TerrainMix::default());
        self.success(&format!("{placed} obstacles scattered."))
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn with_grid<T>(&mut self, f: impl FnOnce(&mut Grid) -> T) -> Option<T> {
        self.grid.as_mut().map(f)
    }

    fn require_grid(&mut self) -> io::Result<bool> {
        if self.grid.is_some() {
            return Ok(true);
        }
        self.error("create a map first")?;
        Ok(false)
    }

    fn report(&mut self, result: Option<Result<(), GridError>>, ok_msg: &str) -> io::Result<()> {
        match result {
            Some(Ok(())) => self.success(ok_msg),
            Some(Err(err)) => self.error(&err.to_string()),
            None => self.error("create a map first"),
        }
    }

    /// Prompt and read one line. `None` means input ended.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.eof = true;
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Prompt for an integer. `None` means input ended or the reply was not
    /// a number; the latter is reported to the user.
    fn read_int(&mut self, prompt: &str) -> io::Result<Option<i32>> {
        let Some(line) = self.read_line(prompt)? else {
            return Ok(None);
        };
        match line.trim().parse::<i32>() {
            Ok(n) => Ok(Some(n)),
            Err(_) => {
                self.error(&format!("{:?} is not a whole number", line.trim()))?;
                Ok(None)
            }
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn success(&mut self, msg: &str) -> io::Result<()> {
        let msg = self.paint(msg, Color::Green);
        writeln!(self.out, "{msg}")
    }

    fn error(&mut self, msg: &str) -> io::Result<()> {
        let msg = self.paint(&format!("error: {msg}"), Color::Red);
        writeln!(self.out, "{msg}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridroute_core::{Coord, Glyphs};
    use gridroute_paths::ShortestPathEngine;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn run_script(grid: Option<Grid>, script: &str) -> (String, Option<Grid>) {
        run_script_with(grid, None, script)
    }

    fn run_script_with(
        grid: Option<Grid>,
        startup_error: Option<GridError>,
        script: &str,
    ) -> (String, Option<Grid>) {
        let mut out = Vec::new();
        let coordinator = RouteCoordinator::new(ShortestPathEngine::new(), Glyphs::ascii());
        let mut shell = Shell::new(
            Cursor::new(script.as_bytes().to_vec()),
            &mut out,
            grid,
            coordinator,
            StdRng::seed_from_u64(1),
            false,
        )
        .with_startup_error(startup_error);
        shell.run().unwrap();
        let grid = shell.grid.take();
        drop(shell);
        (String::from_utf8(out).unwrap(), grid)
    }

    #[test]
    fn full_session_finds_route() {
        let script = "1\n1\n3\n5\n2\n0\n1\n3\n0\n0\n4\n0\n2\n8\n0\n";
        let (out, grid) = run_script(None, script);
        assert!(out.contains("1x3 map created."));
        assert!(out.contains("water placed at (0, 1)."));
        assert!(out.contains("Origin set at (0, 0)."));
        assert!(out.contains("Target set at (0, 2)."));
        assert!(out.contains("Route found with total cost 4:\nS*G"));
        assert!(out.contains("route of 3 steps, total cost 4"));
        assert!(out.ends_with("Bye.\n"));
        let grid = grid.unwrap();
        assert_eq!(grid.at(Coord::new(0, 1)), Some(CellType::Water));
    }

    #[test]
    fn commands_need_a_map() {
        let (out, _) = run_script(None, "3\n7\n8\n9\n0\n");
        assert_eq!(out.matches("error: create a map first").count(), 4);
    }

    #[test]
    fn invalid_dimensions_fall_back_and_are_reported() {
        let (out, grid) = run_script(None, "1\n0\n5\n0\n");
        assert!(out.contains("error: invalid grid size 0x5, using the default 10x10"));
        assert!(out.contains("10x10 map created."));
        assert_eq!(grid.map(|g| (g.height(), g.width())), Some((10, 10)));
    }

    #[test]
    fn startup_fallback_is_reported_before_the_menu() {
        let (grid, fallback) = Grid::new_or_default(-2, 4);
        let (out, grid) = run_script_with(Some(grid), fallback, "0\n");
        let err_at = out
            .find("error: invalid grid size -2x4, using the default 10x10")
            .unwrap();
        assert!(err_at < out.find("1. Create custom map").unwrap());
        assert_eq!(grid.map(|g| (g.height(), g.width())), Some((10, 10)));
    }

    #[test]
    fn oversized_map_falls_back_to_default() {
        let (out, grid) = run_script(None, "1\n1\n2147483647\n0\n");
        assert!(out.contains("error: grid size 1x2147483647 is too large, using the default 10x10"));
        assert!(out.contains("10x10 map created."));
        assert_eq!(grid.map(|g| (g.height(), g.width())), Some((10, 10)));
    }

    #[test]
    fn rejections_are_printed() {
        let script = "3\n9\n9\n3\n0\n0\n5\n7\n5\n3\n0\n0\n6\n-1\n0\nx\n0\n";
        let (out, grid) = run_script(Some(Grid::new(2, 2).unwrap()), script);
        assert!(out.contains("error: (9, 9) is outside the 2x2 grid"));
        assert!(out.contains("error: invalid obstacle type 7"));
        assert!(out.contains("error: (0, 0) is the origin and cannot hold an obstacle"));
        assert!(out.contains("error: (-1, 0) is outside the 2x2 grid"));
        assert!(out.contains("error: invalid option \"x\", try again"));
        assert_eq!(grid.unwrap().origin(), Some(Coord::new(0, 0)));
    }

    #[test]
    fn non_numeric_reply_returns_to_menu() {
        let (out, grid) = run_script(Some(Grid::new(2, 2).unwrap()), "3\nabc\n0\n");
        assert!(out.contains("error: \"abc\" is not a whole number"));
        assert_eq!(grid.unwrap().origin(), None);
    }

    #[test]
    fn missing_endpoints_report_no_route() {
        let (out, _) = run_script(Some(Grid::new(2, 2).unwrap()), "8\n0\n");
        assert!(out.contains("error: no route found: set the origin and target first"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let (out, _) = run_script(None, "1\n4\n");
        assert!(out.ends_with("Bye.\n"));
        assert!(!out.contains("map created"));
    }

    #[test]
    fn scatter_keeps_endpoints_open() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_origin(0, 0).unwrap();
        grid.set_target(4, 4).unwrap();
        let (out, grid) = run_script(Some(grid), "9\n7\n0\n");
        assert!(out.contains("obstacles scattered."));
        let grid = grid.unwrap();
        assert_eq!(grid.at(Coord::new(0, 0)), Some(CellType::Open));
        assert_eq!(grid.at(Coord::new(4, 4)), Some(CellType::Open));
        assert!(out.contains("Current map:\nS"));
    }
}
