use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    DisplayTarget, EnvProbe, EnvironmentProbe, NotebookRenderer, RenderConfig, RenderFrame,
    Renderer, StandaloneRenderer,
};

use super::{
    AreaOptions, BarOptions, BaselineOptions, CandlestickOptions, ChartOptions, HistogramOptions,
    LineOptions, Pane, PaneId, PaneOptions, Series, SeriesOptions,
};

/// Creates an empty chart after validating its options.
pub fn create_chart(options: ChartOptions) -> ChartResult<Chart> {
    options.validate()?;
    let viewport = options.viewport();
    debug!(
        width = viewport.width,
        height = viewport.height,
        "create chart"
    );
    Ok(Chart {
        options,
        panes: Vec::new(),
        next_pane_id: 0,
        default_pane: None,
    })
}

/// Root of the chart tree: options plus ordered panes.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    options: ChartOptions,
    panes: Vec<Pane>,
    next_pane_id: u32,
    default_pane: Option<PaneId>,
}

impl Chart {
    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ChartOptions) -> ChartResult<()> {
        options.validate()?;
        self.options = options;
        Ok(())
    }

    #[must_use]
    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    #[must_use]
    pub fn pane(&self, id: PaneId) -> Option<&Pane> {
        self.panes.iter().find(|pane| pane.id() == id)
    }

    pub fn pane_mut(&mut self, id: PaneId) -> Option<&mut Pane> {
        self.panes.iter_mut().find(|pane| pane.id() == id)
    }

    /// Appends a pane below the existing ones.
    pub fn add_pane(&mut self, options: PaneOptions) -> ChartResult<&mut Pane> {
        let id = PaneId::new(self.next_pane_id);
        let pane = Pane::new(id, options)?;
        self.next_pane_id = self.next_pane_id.saturating_add(1);
        debug!(
            pane = id.raw(),
            height_ratio = options.height_ratio,
            pane_count = self.panes.len() + 1,
            "add pane"
        );
        let index = self.panes.len();
        self.panes.push(pane);
        Ok(&mut self.panes[index])
    }

    /// Adds a series to the default pane, creating that pane on first use.
    pub fn add_series(&mut self, options: impl Into<SeriesOptions>) -> &mut Series {
        let index = self.default_pane_index();
        self.panes[index].add_series(options)
    }

    pub fn add_candlestick_series(&mut self, options: CandlestickOptions) -> &mut Series {
        self.add_series(options)
    }

    pub fn add_bar_series(&mut self, options: BarOptions) -> &mut Series {
        self.add_series(options)
    }

    pub fn add_line_series(&mut self, options: LineOptions) -> &mut Series {
        self.add_series(options)
    }

    pub fn add_area_series(&mut self, options: AreaOptions) -> &mut Series {
        self.add_series(options)
    }

    pub fn add_histogram_series(&mut self, options: HistogramOptions) -> &mut Series {
        self.add_series(options)
    }

    pub fn add_baseline_series(&mut self, options: BaselineOptions) -> &mut Series {
        self.add_series(options)
    }

    fn default_pane_index(&mut self) -> usize {
        if let Some(id) = self.default_pane {
            if let Some(index) = self.panes.iter().position(|pane| pane.id() == id) {
                return index;
            }
        }
        let id = PaneId::new(self.next_pane_id);
        self.next_pane_id = self.next_pane_id.saturating_add(1);
        debug!(pane = id.raw(), "create default pane");
        self.panes.push(Pane::default_for(id));
        self.default_pane = Some(id);
        self.panes.len() - 1
    }

    /// Deterministic JSON configuration document for this chart.
    pub fn config_json(&self) -> ChartResult<String> {
        Ok(RenderFrame::build(self)?.config_json().to_owned())
    }

    pub fn render_with<R: Renderer>(&self, renderer: &mut R) -> ChartResult<()> {
        let frame = RenderFrame::build(self)?;
        renderer.render(&frame)
    }

    /// Complete self-contained HTML document.
    pub fn to_html(&self, config: &RenderConfig) -> ChartResult<String> {
        let frame = RenderFrame::build(self)?;
        StandaloneRenderer::new(config.clone()).document(&frame)
    }

    /// Writes the standalone document to `path` without opening it.
    pub fn save(&self, path: impl AsRef<Path>, config: &RenderConfig) -> ChartResult<PathBuf> {
        let mut renderer = StandaloneRenderer::to_path(config.clone(), path.as_ref());
        self.render_with(&mut renderer)?;
        renderer
            .last_path()
            .map(Path::to_path_buf)
            .ok_or_else(|| ChartError::Render("standalone renderer wrote no file".to_owned()))
    }

    /// Displays the chart on `target`, or on the detected target when `None`.
    ///
    /// Configuration comes from defaults plus environment overrides. No copy
    /// of the Lightweight Charts script ships with this crate, so unless
    /// `LITECHART_LIBRARY_PATH` is set this fails with [`ChartError::Render`].
    /// Use [`Chart::show_with`] to pass a config with
    /// [`RenderConfig::with_library`] instead.
    pub fn show(&self, target: Option<DisplayTarget>) -> ChartResult<()> {
        self.show_with(target, &EnvProbe::new(), &RenderConfig::from_env())
    }

    pub fn show_with(
        &self,
        target: Option<DisplayTarget>,
        probe: &dyn EnvironmentProbe,
        config: &RenderConfig,
    ) -> ChartResult<()> {
        let target = target.unwrap_or_else(|| probe.detect());
        debug!(?target, pane_count = self.panes.len(), "show chart");
        match target {
            DisplayTarget::Notebook => {
                self.render_with(&mut NotebookRenderer::stdout(config.clone()))
            }
            DisplayTarget::Standalone => self.show_browser(config).map(|_| ()),
        }
    }

    /// Emits the notebook display payload to `writer`.
    pub fn show_notebook<W: Write>(&self, writer: W, config: &RenderConfig) -> ChartResult<()> {
        let mut renderer = NotebookRenderer::new(writer, config.clone());
        self.render_with(&mut renderer)
    }

    /// Writes the standalone document to the output directory and opens it
    /// when `config.open_browser` is set. Returns the written path.
    pub fn show_browser(&self, config: &RenderConfig) -> ChartResult<PathBuf> {
        let mut renderer = StandaloneRenderer::new(config.clone());
        self.render_with(&mut renderer)?;
        renderer
            .last_path()
            .map(Path::to_path_buf)
            .ok_or_else(|| ChartError::Render("standalone renderer wrote no file".to_owned()))
    }
}
