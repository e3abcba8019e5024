use axum::response::Html;

/// Single-page upload form. Posts the chosen file to the predict endpoint
/// and shows the category (or the error message) inline.
const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Resume Category Prediction</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 40rem; margin: 3rem auto; padding: 0 1rem; color: #222; }
    h1 { text-align: center; }
    p.hint { color: #666; }
    form { border: 1px solid #ddd; border-radius: 8px; padding: 1.5rem; }
    button { margin-top: 1rem; padding: 0.5rem 1.25rem; cursor: pointer; }
    #result { margin-top: 1.5rem; padding: 1rem; border-radius: 8px; display: none; }
    #result.ok { display: block; background: #e8f5e9; }
    #result.err { display: block; background: #fdecea; }
  </style>
</head>
<body>
  <h1>Resume Category Prediction</h1>
  <p class="hint">Upload a resume and the app will predict its job category.
     Accepted formats: PDF, DOCX, TXT.</p>
  <form id="upload-form">
    <input type="file" name="resume" id="resume" accept=".pdf,.docx,.txt" required>
    <br>
    <button type="submit">Predict Category</button>
  </form>
  <div id="result"></div>
  <script>
    const form = document.getElementById('upload-form');
    const result = document.getElementById('result');
    form.addEventListener('submit', async (event) => {
      event.preventDefault();
      const data = new FormData(form);
      result.className = '';
      result.textContent = 'Analyzing resume...';
      result.style.display = 'block';
      try {
        const response = await fetch('/api/v1/predict', { method: 'POST', body: data });
        const body = await response.json();
        if (response.ok) {
          result.className = 'ok';
          result.textContent = 'Predicted category: ' + body.category;
        } else {
          result.className = 'err';
          result.textContent = body.error.message;
        }
      } catch (err) {
        result.className = 'err';
        result.textContent = 'Request failed: ' + err;
      }
    });
  </script>
</body>
</html>
"#;

/// GET /
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
