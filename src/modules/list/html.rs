use super::{
    anilist::types::{Entry, MediaList, ABSENT},
    format::MediaFormat,
};

#[derive(Debug, PartialEq)]
pub enum Error {
    MissingCoverImage(u64),
    MissingStartDate(u64),
    MissingEndDate(u64),
}

pub struct RowOptions<'a> {
    pub format: MediaFormat,
    pub site_url: &'a str,
}

pub fn render_row(entry: &Entry, options: &RowOptions) -> Result<String, Error> {
    let media = &entry.media;
    let cover_image = media
        .cover_image
        .as_ref()
        .ok_or(Error::MissingCoverImage(media.id))?;
    let cover_url = cover_image.extra_large.as_deref().unwrap_or(ABSENT);
    let start_date = media
        .start_date
        .as_ref()
        .ok_or(Error::MissingStartDate(media.id))?;
    let end_date = media
        .end_date
        .as_ref()
        .ok_or(Error::MissingEndDate(media.id))?;
    let link = format!(
        "{}/{}/{}",
        options.site_url,
        options.format.path_segment(),
        media.id
    );

    // The banner cell links to the cover image and only displays the banner url.
    Ok(format!(
        r#"
            <tr class="entry">
                <td class="entry-title">{title}</td>
                <td class="entry-link"><a href={link}>{link}</a></td>
                <td class="entry-cover"><a href={cover}>{cover}</a></td>
                <td class="entry-banner"><a href={cover}>{banner}</a></td>
                <td class="entry-start">{start}</td>
                <td class="entry-end">{end}</td>
            </tr>"#,
        title = media.title.display(),
        link = link,
        cover = cover_url,
        banner = media.banner_image.as_deref().unwrap_or(ABSENT),
        start = start_date,
        end = end_date,
    ))
}

pub fn render_rows<'a, I>(lists: I, options: &RowOptions) -> Result<String, Error>
where
    I: IntoIterator<Item = &'a MediaList>,
{
    let mut rows = String::new();

    for list in lists {
        for entry in &list.entries {
            rows.push_str(&render_row(entry, options)?);
        }
    }

    Ok(rows)
}

pub fn render_document(title: &str, rows: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
    <head>
        <title>{title}</title>
        <style>
            html, body {{
                width: 100vw;
            }}

            table {{
                width: 97%;
                text-align: center;
            }}
        </style>
    </head>
    <body>
        <table>
            <thead>
                <tr>
                    <th>Title</th>
                    <th>Link</th>
                    <th>Cover</th>
                    <th>Banner</th>
                    <th>Start Date</th>
                    <th>End Date</th>
                </tr>
            </thead>
            <tbody>{rows}
            </tbody>
        </table>
    </body>
</html>
"#
    )
}
