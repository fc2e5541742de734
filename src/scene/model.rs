use crate::{
    editor::media::ImageData,
    foundation::{
        color::Rgb8,
        core::{Canvas, Rect},
    },
    overlay::gradient::GradientSpec,
    template::TemplateKind,
};

/// What a layer represents in the post. Tests and tooling find layers by role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerRole {
    /// Solid template background.
    Background,
    /// User photo.
    Photo,
    /// Overlay computed from editor state.
    Overlay,
    /// Template baseline fade, used when there is no overlay.
    Fade,
    /// User logo.
    Logo,
    /// Date badge (fill and text).
    DateBadge,
    /// Category/label badge (fill and text).
    CategoryBadge,
    /// Decorative accent shape.
    Accent,
    /// Headline text (and its backing block, if any).
    Headline,
    /// Body text.
    Body,
    /// Footer/brand text.
    Footer,
    /// Call-to-action pill (fill and text).
    CallToAction,
}

/// Solid rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct FillLayer {
    /// Role.
    pub role: LayerRole,
    /// Bounds in canvas pixels.
    pub rect: Rect,
    /// Fill color.
    pub color: Rgb8,
    /// Fill opacity.
    pub opacity: f64,
    /// Corner radius in pixels.
    pub corner_radius: f64,
}

/// How an image fills its box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFit {
    /// Scale to cover the box, cropping overflow.
    Cover,
    /// Scale to fit inside the box.
    Contain,
}

/// Clip shape applied to an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageClip {
    /// Clip to the box.
    Rect,
    /// Clip to the circle inscribed in the box.
    Circle,
}

/// Embedded raster image.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageLayer {
    /// Role.
    pub role: LayerRole,
    /// Bounds in canvas pixels.
    pub rect: Rect,
    /// Image payload.
    pub data: ImageData,
    /// Fit mode.
    pub fit: ImageFit,
    /// Clip shape.
    pub clip: ImageClip,
    /// Image opacity.
    pub opacity: f64,
}

/// Rectangle painted with a gradient.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientLayer {
    /// Role.
    pub role: LayerRole,
    /// Bounds in canvas pixels.
    pub rect: Rect,
    /// Gradient.
    pub gradient: GradientSpec,
}

/// Horizontal text alignment inside the text box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    /// Left aligned.
    #[default]
    Start,
    /// Centered.
    Center,
    /// Right aligned.
    End,
}

/// Typography of a text layer.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// CSS font-family stack.
    pub font_stack: &'static str,
    /// Font size in pixels.
    pub size_px: f64,
    /// CSS font weight.
    pub weight: u16,
    /// Text color.
    pub color: Rgb8,
    /// Text opacity.
    pub opacity: f64,
    /// Render in upper case (presentation only; the layer text stays verbatim).
    pub uppercase: bool,
    /// Extra tracking in em.
    pub letter_spacing_em: f64,
    /// Line height as a multiple of the font size.
    pub line_height: f64,
    /// Alignment.
    pub align: TextAlign,
}

impl TextStyle {
    /// Regular-weight style with common defaults.
    pub fn new(font_stack: &'static str, size_px: f64, color: Rgb8) -> Self {
        Self {
            font_stack,
            size_px,
            weight: 400,
            color,
            opacity: 1.0,
            uppercase: false,
            letter_spacing_em: 0.0,
            line_height: 1.25,
            align: TextAlign::Start,
        }
    }

    /// Set the weight.
    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    /// Set the opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Render upper case.
    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    /// Set tracking in em.
    pub fn tracking(mut self, em: f64) -> Self {
        self.letter_spacing_em = em;
        self
    }

    /// Set the line height multiple.
    pub fn line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }

    /// Set the alignment.
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Height of one line in pixels.
    pub fn line_px(&self) -> f64 {
        self.size_px * self.line_height
    }
}

/// Wrapped block of text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLayer {
    /// Role.
    pub role: LayerRole,
    /// Source text, verbatim from state.
    pub text: String,
    /// Wrapped lines, in source case.
    pub lines: Vec<String>,
    /// Text box in canvas pixels; height covers all lines.
    pub rect: Rect,
    /// Typography.
    pub style: TextStyle,
}

/// One visual layer.
#[derive(Clone, Debug, PartialEq)]
pub enum Layer {
    /// Solid rectangle.
    Fill(FillLayer),
    /// Raster image.
    Image(ImageLayer),
    /// Gradient rectangle.
    Gradient(GradientLayer),
    /// Text block.
    Text(TextLayer),
}

impl Layer {
    /// Role of the layer.
    pub fn role(&self) -> LayerRole {
        match self {
            Self::Fill(l) => l.role,
            Self::Image(l) => l.role,
            Self::Gradient(l) => l.role,
            Self::Text(l) => l.role,
        }
    }

    /// Bounds of the layer.
    pub fn rect(&self) -> Rect {
        match self {
            Self::Fill(l) => l.rect,
            Self::Image(l) => l.rect,
            Self::Gradient(l) => l.rect,
            Self::Text(l) => l.rect,
        }
    }
}

impl From<FillLayer> for Layer {
    fn from(layer: FillLayer) -> Self {
        Self::Fill(layer)
    }
}

impl From<ImageLayer> for Layer {
    fn from(layer: ImageLayer) -> Self {
        Self::Image(layer)
    }
}

impl From<GradientLayer> for Layer {
    fn from(layer: GradientLayer) -> Self {
        Self::Gradient(layer)
    }
}

impl From<TextLayer> for Layer {
    fn from(layer: TextLayer) -> Self {
        Self::Text(layer)
    }
}

/// A rendered post: the capture target handed to export.
#[derive(Clone, Debug, PartialEq)]
pub struct Composition {
    /// Template that produced it.
    pub template: TemplateKind,
    /// Logical canvas size.
    pub canvas: Canvas,
    /// Outer corner radius; the area outside stays transparent.
    pub corner_radius: f64,
    /// Layers in paint order (first is bottom-most).
    pub layers: Vec<Layer>,
}

impl Composition {
    /// Empty composition.
    pub fn new(template: TemplateKind, canvas: Canvas) -> Self {
        Self {
            template,
            canvas,
            corner_radius: 0.0,
            layers: Vec::new(),
        }
    }

    /// Append a layer on top.
    pub fn push(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Append a layer if there is one.
    pub fn push_opt(&mut self, layer: Option<Layer>) {
        if let Some(layer) = layer {
            self.layers.push(layer);
        }
    }

    /// Layers with `role`, in paint order.
    pub fn layers_with_role(&self, role: LayerRole) -> impl Iterator<Item = &Layer> + '_ {
        self.layers.iter().filter(move |l| l.role() == role)
    }

    /// Whether any layer has `role`.
    pub fn has_role(&self, role: LayerRole) -> bool {
        self.layers_with_role(role).next().is_some()
    }

    /// First text layer with `role`.
    pub fn text(&self, role: LayerRole) -> Option<&TextLayer> {
        self.layers_with_role(role).find_map(|l| match l {
            Layer::Text(t) => Some(t),
            _ => None,
        })
    }

    /// First fill layer with `role`.
    pub fn fill(&self, role: LayerRole) -> Option<&FillLayer> {
        self.layers_with_role(role).find_map(|l| match l {
            Layer::Fill(f) => Some(f),
            _ => None,
        })
    }

    /// First image layer with `role`.
    pub fn image(&self, role: LayerRole) -> Option<&ImageLayer> {
        self.layers_with_role(role).find_map(|l| match l {
            Layer::Image(i) => Some(i),
            _ => None,
        })
    }

    /// First gradient layer with `role`.
    pub fn gradient(&self, role: LayerRole) -> Option<&GradientLayer> {
        self.layers_with_role(role).find_map(|l| match l {
            Layer::Gradient(g) => Some(g),
            _ => None,
        })
    }
}
