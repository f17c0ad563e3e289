//! The fixed poster template: document shell and style sheet.
//!
//! Every visual constant comes from the [`Theme`] passed in; nothing here
//! reads global state. The layout itself (header band with logo and title,
//! three-column grid of bordered section boxes) is fixed.
//!
//! The `@page` rule pins the printed page to the poster's physical size with
//! zero margins, so a headless browser printing this file produces a
//! single page of exactly `poster_width × poster_height`.

use crate::config::Theme;

/// Build the embedded style sheet for `theme`.
pub fn style_sheet(theme: &Theme) -> String {
    format!(
        r#"		@page {{
			size: {poster_width} {poster_height};
			margin: 0;
		}}

		* {{
			margin: 0;
			padding: 0;
			box-sizing: border-box;
		}}

		body {{
			font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
			background: white;
			color: #333;
			line-height: 1.4;
			-webkit-print-color-adjust: exact;
			print-color-adjust: exact;
		}}

		.poster {{
			width: {poster_width};
			height: {poster_height};
			background: white;
			display: flex;
			flex-direction: column;
			padding: 0;
			margin: 0 auto;
			box-shadow: 0 0 20px rgba(0,0,0,0.3);
		}}

		/* Header Section */
		.header {{
			display: flex;
			align-items: center;
			justify-content: space-between;
			background: {header_background};
			padding: {header_padding};
			margin-bottom: 0;
			height: {header_height};
		}}

		.logo {{
			display: flex;
			align-items: center;
			height: 100%;
		}}

		.logo-icon {{
			height: 100%;
			aspect-ratio: 1;
			display: flex;
			align-items: center;
			justify-content: center;
		}}

		.logo-icon img {{
			width: 100%;
			height: 100%;
			object-fit: contain;
		}}

		.title-section {{
			flex-grow: 1;
			text-align: center;
			padding: {title_section_padding};
		}}

		h1 {{
			font-size: {title_font_size};
			color: white;
			font-weight: 600;
			margin-bottom: {title_margin_bottom};
			line-height: 1;
		}}

		.authors {{
			font-size: {authors_font_size};
			color: {authors_color};
			line-height: 1.3;
		}}

		/* Main Content Grid */
		.content {{
			display: grid;
			grid-template-columns: 1fr 1fr 1fr;
			gap: {content_gap};
			flex-grow: 1;
			padding: {content_padding};
		}}

		.column {{
			display: flex;
			flex-direction: column;
			gap: {column_gap};
		}}

		/* Section Boxes */
		.section {{
			background: {section_background};
			padding: {section_padding};
			border-radius: {section_border_radius};
			border: 1px solid {section_border};
		}}

		.section-title {{
			background: {primary_color};
			color: white;
			padding: {section_title_padding};
			margin: {section_title_margin};
			font-size: {section_title_font_size};
			font-weight: 600;
			border-radius: {section_border_radius} {section_border_radius} 0 0;
		}}

		.section-content {{
			font-size: {section_content_font_size};
			line-height: 1.5;
		}}

		.section-content p {{
			margin-bottom: {paragraph_margin};
		}}

		/* Graph placeholder */
		.graph-container {{
			background: white;
			padding: {graph_padding};
			border-radius: {section_border_radius};
			margin: {graph_margin};
			text-align: center;
			min-height: {graph_min_height};
			display: flex;
			align-items: center;
			justify-content: center;
		}}

		.graph-container img {{
			max-width: 100%;
			height: auto;
		}}

		/* Bullet Points */
		ul {{
			padding-left: {list_padding_left};
		}}

		li {{
			margin-bottom: {list_item_margin};
		}}
"#,
        poster_width = theme.poster_width,
        poster_height = theme.poster_height,
        header_height = theme.header_height,
        header_background = theme.header_background,
        header_padding = theme.header_padding,
        title_font_size = theme.title_font_size,
        title_margin_bottom = theme.title_margin_bottom,
        authors_font_size = theme.authors_font_size,
        section_title_font_size = theme.section_title_font_size,
        section_content_font_size = theme.section_content_font_size,
        primary_color = theme.primary_color,
        section_background = theme.section_background,
        section_border = theme.section_border,
        authors_color = theme.authors_color,
        content_padding = theme.content_padding,
        content_gap = theme.content_gap,
        column_gap = theme.column_gap,
        section_padding = theme.section_padding,
        section_border_radius = theme.section_border_radius,
        section_title_padding = theme.section_title_padding,
        section_title_margin = theme.section_title_margin,
        paragraph_margin = theme.paragraph_margin,
        title_section_padding = theme.title_section_padding,
        graph_padding = theme.graph_padding,
        graph_margin = theme.graph_margin,
        graph_min_height = theme.graph_min_height,
        list_padding_left = theme.list_padding_left,
        list_item_margin = theme.list_item_margin,
    )
}

/// Values substituted into the document shell.
#[derive(Debug, Clone, Copy)]
pub struct ShellValues<'a> {
    /// Plain-text title for the `<title>` element.
    pub page_title: &'a str,
    /// Title markup for the `<h1>` (may contain `<br>`).
    pub heading: &'a str,
    pub authors: &'a str,
    /// Already-resolved logo `src`.
    pub logo: &'a str,
}

/// Everything from `<!DOCTYPE html>` up to the opening of the content grid.
pub fn shell_open(values: &ShellValues<'_>, theme: &Theme) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">

<head>
	<meta charset="UTF-8">
	<meta name="viewport" content="width=device-width, initial-scale=1.0">
	<title>{page_title}</title>
	<style>
{style}	</style>
</head>

<body>
	<div class="poster">
		<!-- Header -->
		<div class="header">
			<div class="logo">
				<div class="logo-icon">
					<img src="{logo}" alt="Logo">
				</div>
			</div>
			<div class="title-section">
				<h1>{heading}</h1>
				<div class="authors">
					{authors}
				</div>
			</div>
		</div>

		<!-- Main Content -->
		<div class="content">
"#,
        page_title = values.page_title,
        style = style_sheet(theme),
        logo = values.logo,
        heading = values.heading,
        authors = values.authors,
    )
}

/// Closes the content grid, the poster and the document.
pub const SHELL_CLOSE: &str = "\t\t</div>\n\t</div>\n</body>\n\n</html>\n";
