//! One-shot CLI commands. Each resolves its arguments through the query
//! layer and writes plain text to `out`.

use std::io::Write;

use anyhow::{anyhow, bail};

use crate::api::{Book, Chapter, ChapterContent, Translation};
use crate::cli::Command;
use crate::config::Config;
use crate::paging::Paginator;
use crate::query::{FetchPlan, QueryClient, Resource};
use crate::selection::SelectionStore;
use crate::testament::{split_by_testament, Testament};

pub async fn execute(
    command: Command,
    queries: &QueryClient,
    config: &Config,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Translations { page } => translations(queries, config.ui.page_size, page, out).await,
        Command::Books {
            translation,
            testament,
        } => books(queries, &translation, testament.map(Testament::from), out).await,
        Command::Chapters { translation, book } => chapters(queries, &translation, &book, out).await,
        Command::Read {
            translation,
            book,
            chapter,
        } => {
            let store = SelectionStore::new();
            read(queries, &store, &translation, &book, &chapter, out).await
        }
        Command::Verses {
            translation,
            book,
            chapter,
        } => verses(queries, &translation, &book, &chapter, out).await,
        Command::Verse { translation, verse: id } => verse(queries, &translation, &id, out).await,
        Command::Search {
            translation,
            query,
            page,
        } => {
            let query = query.join(" ");
            search(queries, &translation, &query, config.ui.page_size, page, out).await
        }
    }
}

pub async fn translations(
    queries: &QueryClient,
    page_size: usize,
    page: usize,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let items = queries.translations().await?;
    if items.is_empty() {
        writeln!(out, "No translations available.")?;
        return Ok(());
    }

    let pages = Paginator::new(items.len(), page_size)?;
    let shown = pages
        .page_items(&items, page)
        .ok_or_else(|| anyhow!("Page {} is out of range (1-{})", page, pages.total_pages()))?;

    for t in shown {
        writeln!(
            out,
            "{:<24} {:<10} {} ({})",
            t.id,
            t.abbreviation,
            t.name,
            t.language_name()
        )?;
    }
    writeln!(
        out,
        "\nPage {} of {} ({} translations)",
        page,
        pages.total_pages(),
        items.len()
    )?;
    Ok(())
}

pub async fn books(
    queries: &QueryClient,
    translation: &str,
    testament: Option<Testament>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let translation = resolve_translation(queries, translation).await?;
    let items = queries.books(Some(&translation.id)).await?;
    if items.is_empty() {
        writeln!(out, "No books found for {}.", translation.abbreviation)?;
        return Ok(());
    }

    let (old, new) = split_by_testament(&items);
    let sections = match testament {
        Some(Testament::Old) => vec![(Testament::Old, old)],
        Some(Testament::New) => vec![(Testament::New, new)],
        None => vec![(Testament::Old, old), (Testament::New, new)],
    };

    let mut first = true;
    for (testament, list) in sections {
        if list.is_empty() {
            continue;
        }
        if !first {
            writeln!(out)?;
        }
        first = false;
        writeln!(out, "{}", testament.label())?;
        for book in list {
            writeln!(out, "  {:<6} {}", book.id, book.name)?;
        }
    }
    if first {
        writeln!(out, "No books found for {}.", translation.abbreviation)?;
    }
    Ok(())
}

pub async fn chapters(
    queries: &QueryClient,
    translation: &str,
    book: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let translation = resolve_translation(queries, translation).await?;
    let books = queries.books(Some(&translation.id)).await?;
    let book = find_book(&books, book)
        .ok_or_else(|| anyhow!("Book '{}' not found in {}", book, translation.abbreviation))?;

    let items = queries.chapters(Some(&translation.id), Some(&book.id)).await?;
    if items.is_empty() {
        writeln!(out, "No chapters found for {}.", book.name)?;
        return Ok(());
    }

    writeln!(out, "{} ({} chapters)", book.name, items.len())?;
    let numbers: Vec<&str> = items.iter().map(|c| c.number.as_str()).collect();
    writeln!(out, "  {}", numbers.join(" "))?;
    Ok(())
}

/// Resolve translation, book and chapter through a [`SelectionStore`], then
/// fetch whatever the resulting [`FetchPlan`] asks for.
pub async fn read(
    queries: &QueryClient,
    store: &SelectionStore,
    translation: &str,
    book: &str,
    chapter: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let selected = resolve_translation(queries, translation).await?;
    store.select_translation(Some(selected));

    let selection = store.selection();
    let books = queries.books(selection.translation_id()).await?;
    let found = find_book(&books, book).ok_or_else(|| {
        anyhow!(
            "Book '{}' not found in {}",
            book,
            selection.breadcrumb()
        )
    })?;
    store.select_book(found.clone())?;

    let selection = store.selection();
    let chapters = queries
        .chapters(selection.translation_id(), selection.book_id())
        .await?;
    let found = find_chapter(&chapters, chapter)
        .ok_or_else(|| anyhow!("Chapter '{}' not found in {}", chapter, selection.breadcrumb()))?;
    store.select_chapter(found.clone())?;

    let plan = FetchPlan::derive(&store.selection(), None);
    let mut content = None;
    for key in plan.keys() {
        if let Resource::ChapterContent(loaded) = queries.fetch(key).await? {
            content = Some(loaded);
        }
    }

    let content = content.ok_or_else(|| anyhow!("No content for {}", store.selection().breadcrumb()))?;
    print_content(&content, out)
}

pub async fn verses(
    queries: &QueryClient,
    translation: &str,
    book: &str,
    chapter: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let translation = resolve_translation(queries, translation).await?;
    let books = queries.books(Some(&translation.id)).await?;
    let book = find_book(&books, book)
        .ok_or_else(|| anyhow!("Book '{}' not found in {}", book, translation.abbreviation))?;
    let chapters = queries.chapters(Some(&translation.id), Some(&book.id)).await?;
    let chapter = find_chapter(&chapters, chapter)
        .ok_or_else(|| anyhow!("Chapter '{}' not found in {}", chapter, book.name))?;

    let items = queries.verses(Some(&translation.id), Some(&chapter.id)).await?;
    if items.is_empty() {
        writeln!(out, "No verses found for {}.", chapter.reference)?;
        return Ok(());
    }

    writeln!(out, "{} ({} verses)", chapter.reference, items.len())?;
    for item in &items {
        writeln!(out, "  {}", item.id)?;
    }
    Ok(())
}

pub async fn verse(
    queries: &QueryClient,
    translation: &str,
    verse_id: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let translation = resolve_translation(queries, translation).await?;
    let verse = queries
        .verse(Some(&translation.id), Some(verse_id.trim()))
        .await?
        .ok_or_else(|| anyhow!("Verse id must not be empty"))?;

    writeln!(out, "{}", verse.reference)?;
    writeln!(out, "  {}", verse.content.trim())?;
    if !verse.copyright.trim().is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", verse.copyright.trim())?;
    }
    Ok(())
}

pub async fn search(
    queries: &QueryClient,
    translation: &str,
    query: &str,
    page_size: usize,
    page: usize,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let query = query.trim();
    if query.is_empty() {
        bail!("Search query must not be empty");
    }

    let translation = resolve_translation(queries, translation).await?;
    let results = queries.search(Some(&translation.id), query).await?;
    if results.is_empty() {
        writeln!(out, "No results found for \"{}\"", query)?;
        return Ok(());
    }

    let pages = Paginator::new(results.verses.len(), page_size)?;
    let shown = pages
        .page_items(&results.verses, page)
        .ok_or_else(|| anyhow!("Page {} is out of range (1-{})", page, pages.total_pages()))?;

    for hit in shown {
        writeln!(out, "{}", hit.reference)?;
        writeln!(out, "  {}", hit.text.trim())?;
    }
    writeln!(
        out,
        "\nPage {} of {} ({} of {} matches)",
        page,
        pages.total_pages(),
        results.verses.len(),
        results.total
    )?;
    Ok(())
}

fn print_content(content: &ChapterContent, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{}", content.reference)?;
    writeln!(out)?;
    let text = content.content.trim();
    if text.is_empty() {
        writeln!(out, "(This chapter has no text.)")?;
    } else {
        writeln!(out, "{}", text)?;
    }
    if !content.copyright.trim().is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", content.copyright.trim())?;
    }
    Ok(())
}

async fn resolve_translation(queries: &QueryClient, needle: &str) -> anyhow::Result<Translation> {
    let items = queries.translations().await?;
    find_translation(&items, needle)
        .cloned()
        .ok_or_else(|| anyhow!("Translation '{}' not found", needle))
}

/// Match by id, then by abbreviation (case-insensitive).
pub fn find_translation<'a>(items: &'a [Translation], needle: &str) -> Option<&'a Translation> {
    items.iter().find(|t| t.id == needle).or_else(|| {
        items.iter().find(|t| {
            t.abbreviation.eq_ignore_ascii_case(needle)
                || t.abbreviation_local
                    .as_deref()
                    .is_some_and(|a| a.eq_ignore_ascii_case(needle))
        })
    })
}

/// Match by id, abbreviation or name (case-insensitive).
pub fn find_book<'a>(items: &'a [Book], needle: &str) -> Option<&'a Book> {
    items.iter().find(|b| b.id.eq_ignore_ascii_case(needle)).or_else(|| {
        items.iter().find(|b| {
            b.abbreviation.eq_ignore_ascii_case(needle)
                || b.name.eq_ignore_ascii_case(needle)
                || b.name_long.eq_ignore_ascii_case(needle)
        })
    })
}

/// Match by chapter number, then by id.
pub fn find_chapter<'a>(items: &'a [Chapter], needle: &str) -> Option<&'a Chapter> {
    items
        .iter()
        .find(|c| c.number.eq_ignore_ascii_case(needle))
        .or_else(|| items.iter().find(|c| c.id.eq_ignore_ascii_case(needle)))
}
