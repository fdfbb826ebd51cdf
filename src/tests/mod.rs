
mod api_submarks_router;
